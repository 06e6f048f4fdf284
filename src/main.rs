use clap::Parser;
use eth_balance::server::shutdown_signal;
use eth_balance::utils::logger;
use eth_balance::{BalanceHandler, BalanceServer, CliConfig, EtherscanClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.explorer.verbose);

    tracing::info!("Starting eth-balance server");

    // 解析並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    if cli.explorer.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    let client = EtherscanClient::from_config(&config)?;
    tracing::info!("🔗 Balance endpoint: {}", client.endpoint());

    let addr = config.addr.clone();
    let handler = BalanceHandler::new(client, config);
    BalanceServer::new(handler)
        .with_addr(addr)
        .serve(shutdown_signal())
        .await?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
