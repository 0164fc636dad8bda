use tracing::error;

use stockkeeper::bootstrap::{init_tracing_subscriber, platform_config, start};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = platform_config()?;
    init_tracing_subscriber(&config)?;

    let state = match start(&config).await {
        Ok(state) => state,
        Err(err) => {
            error!(error = %format!("{err:#}"), "start-up failed");
            return Err(err);
        }
    };

    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}
