use crate::config::cli::Command;
use crate::config::toml_config::ScriptsConfig;
use crate::core::engine::{RunOutput, ScriptEngine};
use crate::utils::error::Result;
use tokio::io::AsyncWrite;

/// Runs the scripts selected by `command` into `writer`, in order.
///
/// `config` is expected to already carry any subcommand overrides
/// (see `CliConfig::resolve`).
pub async fn run_command<W>(
    command: &Command,
    config: &ScriptsConfig,
    writer: W,
) -> Result<RunOutput<W>>
where
    W: AsyncWrite + Unpin + Send,
{
    let format = config.output.format;
    match command {
        Command::Rot13 { .. } => {
            ScriptEngine::new(config.rot13_script())
                .with_format(format)
                .run_with_writer(writer)
                .await
        }
        Command::Fizzbuzz { .. } => {
            ScriptEngine::new(config.fizzbuzz_script())
                .with_format(format)
                .run_with_writer(writer)
                .await
        }
        Command::All => {
            let first = ScriptEngine::new(config.rot13_script())
                .with_format(format)
                .run_with_writer(writer)
                .await?;
            let second = ScriptEngine::new(config.fizzbuzz_script())
                .with_format(format)
                .run_with_writer(first.writer)
                .await?;
            Ok(RunOutput {
                lines_written: first.lines_written + second.lines_written,
                writer: second.writer,
            })
        }
    }
}
