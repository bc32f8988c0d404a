//! Command-line surface.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::models::report::Aggregate;

/// Barry is a CLI for performing common accounting and banking tasks
#[derive(Debug, Parser)]
#[command(name = "barry", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// View account balances
    Balances(BalancesArgs),
    /// Track spend across counterparties and periods
    Spend(ReportArgs),
    /// Track revenue across counterparties and periods
    Revenue(ReportArgs),
}

#[derive(Debug, Args)]
pub struct BalancesArgs {
    /// API key for authentication (falls back to MERCURY_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
    /// Specifies accounts to filter (comma-separated IDs)
    #[arg(long, value_delimiter = ',')]
    pub accounts: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// API key for authentication (falls back to MERCURY_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
    /// Specifies accounts to filter (comma-separated IDs)
    #[arg(long, value_delimiter = ',')]
    pub accounts: Vec<String>,
    /// Start date for the report (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,
    /// End date for the report (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,
    /// Specifies how report rows are broken down
    #[arg(long, value_enum, default_value = "counterparty")]
    pub aggregate: Aggregate,
    /// Filters for specific counterparties (comma-separated names)
    #[arg(long, value_delimiter = ',')]
    pub counterparty: Vec<String>,
}

/// Parses a `YYYY-MM-DD` date flag. clap runs this during argument
/// parsing, before any command executes.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_rejects_out_of_range() {
        assert!(parse_date("2024-13-40").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_invalid_start_date_fails_at_parse_time() {
        let result = Cli::try_parse_from(["barry", "spend", "--start-date", "2024-13-40"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_comma_separated_filters() {
        let cli = Cli::try_parse_from([
            "barry",
            "spend",
            "--accounts",
            "acct1,acct2",
            "--counterparty",
            "X,Y",
        ])
        .unwrap();

        match cli.command {
            Command::Spend(args) => {
                assert_eq!(args.accounts, vec!["acct1", "acct2"]);
                assert_eq!(args.counterparty, vec!["X", "Y"]);
                assert_eq!(args.aggregate, Aggregate::Counterparty);
            }
            _ => panic!("expected the spend subcommand"),
        }
    }

    #[test]
    fn test_aggregate_mode_values() {
        let cli =
            Cli::try_parse_from(["barry", "revenue", "--aggregate", "month"]).unwrap();
        match cli.command {
            Command::Revenue(args) => assert_eq!(args.aggregate, Aggregate::Month),
            _ => panic!("expected the revenue subcommand"),
        }

        assert!(Cli::try_parse_from(["barry", "revenue", "--aggregate", "multiple"]).is_err());
    }
}
