use clap::Parser;
use eth_balance::core::BalanceResponse;
use eth_balance::utils::logger;
use eth_balance::{BalanceHandler, EtherscanClient, ExplorerArgs};

#[derive(Parser)]
#[command(name = "fetch-balance")]
#[command(about = "Look up the ether balance of one address and print the JSON result")]
struct Args {
    /// Address to query
    address: String,

    #[command(flatten)]
    explorer: ExplorerArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.explorer.verbose);

    let config = args.explorer.resolve()?;
    let client = EtherscanClient::from_config(&config)?;
    let handler = BalanceHandler::new(client, config);

    let body = serde_json::json!({ "address": args.address });
    let result = handler.handle(Some(&body)).await;

    println!("{}", serde_json::to_string_pretty(&result.body)?);
    if let BalanceResponse::Failure { .. } = result.body {
        eprintln!("❌ Request failed with status {}", result.status);
        std::process::exit(1);
    }

    Ok(())
}
