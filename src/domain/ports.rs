use crate::core::sink::LineSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::AsyncWrite;

/// A driver that writes its results, one record per line, into a sink.
#[async_trait]
pub trait Script: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run<W>(&self, sink: &mut LineSink<W>) -> Result<()>
    where
        W: AsyncWrite + Unpin + Send;
}
