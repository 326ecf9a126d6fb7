use anyhow::Result;

use enem_interativo::utils::logging;
use enem_interativo::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // load configuration
    let config = Config::from_env();

    // initialize logging
    logging::init(config.verbose_logging);

    // initialize and run the session
    App::initialize(config).await?.run().await?;

    Ok(())
}
