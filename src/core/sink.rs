use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

/// Line-oriented output for scripts.
///
/// Writes are buffered; nothing is guaranteed to reach the underlying writer
/// until [`LineSink::finish`] flushes it.
pub struct LineSink<W: AsyncWrite + Unpin> {
    writer: BufWriter<W>,
    format: OutputFormat,
    lines_written: usize,
}

impl<W: AsyncWrite + Unpin> LineSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: BufWriter::new(writer),
            format,
            lines_written: 0,
        }
    }

    /// Newline-terminated lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Writes one record followed by a newline.
    ///
    /// In `Text` format a record containing `\n` spans several output lines
    /// and each of them is counted. `JsonLines` escapes them, so a record is
    /// always exactly one line there.
    pub async fn write_line(&mut self, line: &str) -> Result<()> {
        let embedded = match self.format {
            OutputFormat::Text => {
                self.writer.write_all(line.as_bytes()).await?;
                line.matches('\n').count()
            }
            OutputFormat::JsonLines => {
                let encoded = serde_json::to_string(line)?;
                self.writer.write_all(encoded.as_bytes()).await?;
                0
            }
        };
        self.writer.write_all(b"\n").await?;
        self.lines_written += embedded + 1;
        Ok(())
    }

    /// Flushes pending output and hands back the underlying writer.
    pub async fn finish(mut self) -> Result<W> {
        self.writer.flush().await?;
        Ok(self.writer.into_inner())
    }
}
