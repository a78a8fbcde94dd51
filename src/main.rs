use anyhow::Context;
use clicksend_mcp::server::Stopped;
use clicksend_mcp::{ClickSendClient, Config, McpServer, ToolGateway};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        username = config.auth.username().as_str(),
        base_url = %config.base_url,
        "configuration loaded"
    );

    let client = ClickSendClient::builder(config.auth)
        .base_url(config.base_url.as_str())
        .user_agent(concat!("clicksend-mcp/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build ClickSend client")?;

    let mut server = McpServer::new(ToolGateway::new(client));
    let stopped = server.run_stdio().await.context("stdio transport failed")?;
    if stopped == Stopped::Shutdown {
        // The runtime would otherwise wait on the blocking stdin read.
        std::process::exit(0);
    }
    Ok(())
}
