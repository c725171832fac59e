use clap::Parser;
use colored::Colorize as _;
use deposit_cli::{
    args::{Args, Commands},
    cli::{
        deposit::{deposit, format_success},
        error::CliError,
        form::{prompt_amount, prompt_deposit_option},
    },
    env_var::EnvVar,
};
use deposit_client_sdk::external_api::deposit_server::DepositServerClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse();

    dotenvy::dotenv().ok();

    if let Err(e) = main_process(args.command).await {
        println!("{}", e.to_string().red());
        std::process::exit(1);
    }
    Ok(())
}

async fn main_process(command: Commands) -> Result<(), CliError> {
    let env = envy::from_env::<EnvVar>()?;
    match command {
        Commands::Deposit {
            option,
            amount,
            server_url,
        } => {
            let option = match option {
                Some(option) => option,
                None => prompt_deposit_option()?,
            };
            let amount = match amount {
                Some(amount) => amount,
                None => prompt_amount()?,
            };
            let base_url = server_url.unwrap_or(env.deposit_server_base_url);
            let client = DepositServerClient::new(&base_url);
            let tx_hash = deposit(&client, option, &amount).await?;
            println!("{}", format_success(tx_hash).green());
        }
    }
    Ok(())
}
