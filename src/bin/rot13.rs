use anyhow::Context;
use small_scripts::utils::logger;
use small_scripts::{Rot13Script, ScriptEngine};

/// Decodes the built-in message and prints it. Takes no arguments.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    ScriptEngine::new(Rot13Script::default())
        .run()
        .await
        .context("failed to write the decoded message")?;
    Ok(())
}
