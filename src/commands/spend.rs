use crate::api::mercury::MercuryClient;
use crate::models::report::{Direction, ReportConfig};
use crate::services::report_service;

use super::CommandError;

pub async fn execute(client: &MercuryClient, config: &ReportConfig) -> Result<(), CommandError> {
    let transactions = report_service::fetch_transactions(client, config).await?;
    let totals = report_service::aggregate_transactions(
        &transactions,
        &config.counterparties,
        Direction::Spend,
        config.aggregate,
    );

    println!("{}", report_service::render_report(&totals, config.aggregate));
    Ok(())
}
