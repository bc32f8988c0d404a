use tracing::info;

use crate::api::mercury::MercuryClient;
use crate::models::report::BalancesConfig;
use crate::services::report_service;
use crate::utils::Table;

use super::CommandError;

pub async fn execute(client: &MercuryClient, config: &BalancesConfig) -> Result<(), CommandError> {
    let response = client.list_accounts().await?;
    let accounts = report_service::filter_accounts(response.accounts, &config.accounts);
    info!("listing balances for {} account(s)", accounts.len());

    let mut table = Table::new(vec!["Account", "ID", "Current", "Available"])
        .align_right(2)
        .align_right(3);
    for account in &accounts {
        let current = format!("${:.2}", account.current_balance);
        let available = format!("${:.2}", account.available_balance);
        table.add_row(vec![
            account.name.as_str(),
            account.id.as_str(),
            current.as_str(),
            available.as_str(),
        ]);
    }

    println!("{}", table.render());
    Ok(())
}
