use crate::core::rot13::{rot13, ENCODED_MESSAGE};
use crate::core::sink::LineSink;
use crate::domain::ports::Script;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::AsyncWrite;

/// Decodes one message and writes it exactly once.
#[derive(Debug, Clone)]
pub struct Rot13Script {
    message: String,
}

impl Rot13Script {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Rot13Script {
    fn default() -> Self {
        Self::new(ENCODED_MESSAGE)
    }
}

#[async_trait]
impl Script for Rot13Script {
    fn name(&self) -> &'static str {
        "rot13"
    }

    async fn run<W>(&self, sink: &mut LineSink<W>) -> Result<()>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let decoded = rot13(&self.message);
        tracing::debug!(chars = decoded.chars().count(), "Decoded message");
        sink.write_line(&decoded).await
    }
}
