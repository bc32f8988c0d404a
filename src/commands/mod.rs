pub mod balances;
pub mod revenue;
pub mod spend;

use thiserror::Error;

use crate::api::mercury::{ApiError, MercuryClient};
use crate::cli::{BalancesArgs, Cli, Command, ReportArgs};
use crate::models::report::{BalancesConfig, ReportConfig};

const API_KEY_ENV: &str = "MERCURY_API_KEY";

/// Errors surfaced to the user by command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("you must provide an API key, either by setting MERCURY_API_KEY or passing --api-key")]
    MissingApiKey,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Dispatch the parsed CLI invocation to its command handler.
pub async fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Command::Balances(args) => {
            let config = balances_config(args)?;
            let client = MercuryClient::new(config.api_key.clone());
            balances::execute(&client, &config).await
        }
        Command::Spend(args) => {
            let config = report_config(args)?;
            let client = MercuryClient::new(config.api_key.clone());
            spend::execute(&client, &config).await
        }
        Command::Revenue(args) => {
            let config = report_config(args)?;
            let client = MercuryClient::new(config.api_key.clone());
            revenue::execute(&client, &config).await
        }
    }
}

/// Resolve the API key: explicit flag first, then the environment.
fn resolve_api_key(flag: Option<String>) -> Result<String, CommandError> {
    flag.filter(|key| !key.is_empty())
        .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()))
        .ok_or(CommandError::MissingApiKey)
}

fn balances_config(args: BalancesArgs) -> Result<BalancesConfig, CommandError> {
    Ok(BalancesConfig {
        api_key: resolve_api_key(args.api_key)?,
        accounts: args.accounts,
    })
}

fn report_config(args: ReportArgs) -> Result<ReportConfig, CommandError> {
    Ok(ReportConfig {
        api_key: resolve_api_key(args.api_key)?,
        accounts: args.accounts,
        counterparties: args.counterparty,
        start_date: args.start_date,
        end_date: args.end_date,
        aggregate: args.aggregate,
    })
}
