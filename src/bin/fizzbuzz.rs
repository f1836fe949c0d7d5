use anyhow::Context;
use small_scripts::utils::logger;
use small_scripts::{FizzBuzzScript, ScriptEngine};

/// Prints FizzBuzz for 1..=15 between the start and end markers. Takes no arguments.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    ScriptEngine::new(FizzBuzzScript::default())
        .run()
        .await
        .context("failed to write the FizzBuzz sequence")?;
    Ok(())
}
