//! Fetching and aggregation for spend and revenue reports.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::api::mercury::models::{Account, ApiError, Transaction};
use crate::api::mercury::MercuryClient;
use crate::models::report::{Aggregate, Direction, ReportConfig};
use crate::utils::Table;

/// Keep only the accounts named by the filter. An empty filter keeps
/// every account.
pub fn filter_accounts(accounts: Vec<Account>, filter: &[String]) -> Vec<Account> {
    if filter.is_empty() {
        return accounts;
    }
    accounts
        .into_iter()
        .filter(|account| filter.iter().any(|id| *id == account.id))
        .collect()
}

/// Fetch transactions for every selected account, one account at a
/// time. The first failed fetch abandons the whole report.
pub async fn fetch_transactions(
    client: &MercuryClient,
    config: &ReportConfig,
) -> Result<Vec<Transaction>, ApiError> {
    let response = client.list_accounts().await?;
    let accounts = filter_accounts(response.accounts, &config.accounts);
    let params = config.transaction_params();

    let mut transactions = Vec::new();
    for account in &accounts {
        let page = client.list_transactions(&account.id, &params).await?;
        debug!(
            "fetched {} of {} transaction(s) for account {}",
            page.transactions.len(),
            page.total,
            account.id
        );
        transactions.extend(page.transactions);
    }

    info!(
        "fetched {} transaction(s) across {} account(s)",
        transactions.len(),
        accounts.len()
    );
    Ok(transactions)
}

/// Sum transaction amounts grouped by the aggregate key, keeping only
/// transactions that pass the counterparty filter and the sign
/// predicate. The returned map is unordered.
pub fn aggregate_transactions(
    transactions: &[Transaction],
    counterparties: &[String],
    direction: Direction,
    aggregate: Aggregate,
) -> HashMap<String, f64> {
    let mut totals = HashMap::new();

    for txn in transactions {
        if !counterparties.is_empty()
            && !counterparties.iter().any(|name| *name == txn.counterparty_name)
        {
            continue;
        }
        if !direction.matches(txn.amount) {
            continue;
        }
        *totals.entry(aggregate.key(txn)).or_insert(0.0) += txn.amount;
    }

    totals
}

/// Render aggregated totals as a table, rows sorted by group key.
pub fn render_report(totals: &HashMap<String, f64>, aggregate: Aggregate) -> String {
    let mut rows: Vec<(&String, &f64)> = totals.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = Table::new(vec![aggregate.label(), "Total"]).align_right(1);
    for (key, total) in rows {
        let amount = format!("${:.2}", total);
        table.add_row(vec![key.as_str(), amount.as_str()]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(counterparty: &str, amount: f64, created_at: &str) -> Transaction {
        Transaction {
            id: format!("txn-{}-{}", counterparty, amount),
            amount,
            bank_description: None,
            counterparty_id: format!("cp-{}", counterparty),
            counterparty_name: counterparty.to_string(),
            counterparty_nickname: None,
            created_at: created_at.parse().unwrap(),
            dashboard_link: String::new(),
            details: None,
            estimated_delivery_date: None,
            failed_at: None,
            kind: "externalTransfer".to_string(),
            note: None,
            external_memo: None,
            posted_at: None,
            reason_for_failure: None,
            status: "sent".to_string(),
            fee_id: None,
            currency_exchange_info: None,
            compliant_with_receipt_policy: None,
            has_generated_receipt: None,
            credit_account_period_id: None,
            mercury_category: None,
            general_ledger_code_name: None,
            attachments: Vec::new(),
        }
    }

    fn account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            account_number: String::new(),
            routing_number: String::new(),
            name: format!("Account {}", id),
            status: "active".to_string(),
            account_type: "mercury".to_string(),
            created_at: "2022-01-01T00:00:00Z".parse().unwrap(),
            available_balance: 0.0,
            current_balance: 0.0,
            kind: "checking".to_string(),
            legal_business_name: String::new(),
            dashboard_link: String::new(),
        }
    }

    const DAY: &str = "2024-01-15T10:00:00Z";

    #[test]
    fn test_spend_aggregation_by_counterparty() {
        let txns = vec![txn("A", -10.0, DAY), txn("A", -5.0, DAY), txn("B", -3.0, DAY)];
        let totals =
            aggregate_transactions(&txns, &[], Direction::Spend, Aggregate::Counterparty);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["A"], -15.0);
        assert_eq!(totals["B"], -3.0);
    }

    #[test]
    fn test_spend_and_revenue_partition_nonzero_amounts() {
        let txns = vec![
            txn("A", -10.0, DAY),
            txn("A", 4.0, DAY),
            txn("B", -3.0, DAY),
            txn("B", 0.0, DAY),
            txn("C", 7.5, DAY),
        ];

        let spend = aggregate_transactions(&txns, &[], Direction::Spend, Aggregate::Counterparty);
        let revenue =
            aggregate_transactions(&txns, &[], Direction::Revenue, Aggregate::Counterparty);

        assert_eq!(spend["A"], -10.0);
        assert_eq!(spend["B"], -3.0);
        assert_eq!(revenue["A"], 4.0);
        assert_eq!(revenue["C"], 7.5);
        // zero amounts land in neither partition
        assert!(!revenue.contains_key("B"));
        assert!(!spend.contains_key("C"));

        let spend_total: f64 = spend.values().sum();
        let revenue_total: f64 = revenue.values().sum();
        let whole_total: f64 = txns.iter().map(|t| t.amount).sum();
        assert_eq!(spend_total + revenue_total, whole_total);
    }

    #[test]
    fn test_counterparty_filter_excludes_other_names() {
        let txns = vec![txn("X", -1.0, DAY), txn("Y", 2.0, DAY), txn("Z", -4.0, DAY)];
        let filter = vec!["X".to_string(), "Y".to_string()];

        let spend = aggregate_transactions(&txns, &filter, Direction::Spend, Aggregate::Counterparty);
        assert_eq!(spend.len(), 1);
        assert_eq!(spend["X"], -1.0);

        let revenue =
            aggregate_transactions(&txns, &filter, Direction::Revenue, Aggregate::Counterparty);
        assert_eq!(revenue.len(), 1);
        assert_eq!(revenue["Y"], 2.0);
    }

    #[test]
    fn test_filter_accounts_keeps_only_named_ids() {
        let accounts = vec![account("acct1"), account("acct2")];

        let kept = filter_accounts(accounts.clone(), &["acct1".to_string()]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "acct1");

        let all = filter_accounts(accounts, &[]);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_grouping_by_calendar_bucket() {
        let txns = vec![
            txn("A", -1.0, "2024-01-15T10:00:00Z"),
            txn("B", -2.0, "2024-01-20T23:59:59Z"),
            txn("C", -4.0, "2024-03-02T00:00:00Z"),
        ];

        let by_day = aggregate_transactions(&txns, &[], Direction::Spend, Aggregate::Day);
        assert_eq!(by_day["2024-01-15"], -1.0);
        assert_eq!(by_day["2024-01-20"], -2.0);

        let by_month = aggregate_transactions(&txns, &[], Direction::Spend, Aggregate::Month);
        assert_eq!(by_month["2024-01"], -3.0);
        assert_eq!(by_month["2024-03"], -4.0);

        let by_year = aggregate_transactions(&txns, &[], Direction::Spend, Aggregate::Year);
        assert_eq!(by_year["2024"], -7.0);
    }

    #[test]
    fn test_render_report_sorts_rows_by_key() {
        let mut totals = HashMap::new();
        totals.insert("Beta".to_string(), -3.0);
        totals.insert("Alpha".to_string(), -15.0);

        let rendered = render_report(&totals, Aggregate::Counterparty);
        assert!(rendered.contains("Counterparty"));
        assert!(rendered.find("$-15.00").unwrap() < rendered.find("$-3.00").unwrap());
    }
}
