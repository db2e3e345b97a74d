use clap::Parser;
use expertise_admin::cli::{self, Cli};
use expertise_admin::core::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 先于参数解析加载，环境变量作为参数回退值
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = init_logging(cli.config.log_dir.as_deref())?;

    tracing::debug!(resource = ?cli.resource, api_url = %cli.config.api_url, "Starting");

    match cli::run(cli).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Command failed: {e:#}");
            Err(e)
        }
    }
}
