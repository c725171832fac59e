use clap::{Parser, Subcommand};
use deposit_interfaces::api::deposit_server::types::DepositOption;

#[derive(Parser)]
#[clap(name = "deposit-cli")]
#[clap(about = "Deposit to the TransferToken contract through the deposit server")]
pub struct Args {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fields left out are asked for interactively.
    Deposit {
        /// native (ETH) or token (USDT)
        #[clap(long)]
        option: Option<DepositOption>,
        #[clap(long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[clap(long)]
        server_url: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    #[test]
    fn test_parse_deposit_args() {
        let args = Args::parse_from([
            "deposit-cli",
            "deposit",
            "--option",
            "usdt",
            "--amount",
            "50",
        ]);
        match args.command {
            Commands::Deposit {
                option,
                amount,
                server_url,
            } => {
                assert_eq!(option, Some(DepositOption::Token));
                assert_eq!(amount.as_deref(), Some("50"));
                assert!(server_url.is_none());
            }
        }
    }

    #[test]
    fn test_fields_are_optional() {
        let args = Args::parse_from(["deposit-cli", "deposit"]);
        let Commands::Deposit { option, amount, .. } = args.command;
        assert!(option.is_none());
        assert!(amount.is_none());
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result = Args::try_parse_from(["deposit-cli", "deposit", "--option", "btc"]);
        assert!(result.is_err());
    }
}
