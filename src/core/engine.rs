use crate::core::sink::LineSink;
use crate::domain::model::OutputFormat;
use crate::domain::ports::Script;
use crate::utils::error::Result;
use tokio::io::AsyncWrite;

/// What a finished run produced.
#[derive(Debug)]
pub struct RunOutput<W> {
    pub lines_written: usize,
    pub writer: W,
}

pub struct ScriptEngine<S: Script> {
    script: S,
    format: OutputFormat,
}

impl<S: Script> ScriptEngine<S> {
    pub fn new(script: S) -> Self {
        Self {
            script,
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Runs the script against standard output.
    pub async fn run(&self) -> Result<usize> {
        let output = self.run_with_writer(tokio::io::stdout()).await?;
        Ok(output.lines_written)
    }

    pub async fn run_with_writer<W>(&self, writer: W) -> Result<RunOutput<W>>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let name = self.script.name();
        tracing::debug!(script = name, format = ?self.format, "Starting script");

        let mut sink = LineSink::new(writer, self.format);
        self.script.run(&mut sink).await?;
        let lines_written = sink.lines_written();
        let writer = sink.finish().await?;

        tracing::info!(script = name, lines = lines_written, "Script finished");
        Ok(RunOutput {
            lines_written,
            writer,
        })
    }
}
