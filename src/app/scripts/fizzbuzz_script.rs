use crate::core::fizzbuzz::fizzbuzz;
use crate::core::sink::LineSink;
use crate::domain::ports::Script;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::AsyncWrite;

pub const DRIVER_BOUND: i64 = 15;
pub const START_MARKER: &str = "Running FizzBuzz...";
pub const END_MARKER: &str = "FizzBuzz complete!";

/// Prints the FizzBuzz sequence between a start and an end marker line.
#[derive(Debug, Clone)]
pub struct FizzBuzzScript {
    bound: i64,
    start_marker: String,
    end_marker: String,
}

impl FizzBuzzScript {
    pub fn new(bound: i64) -> Self {
        Self {
            bound,
            start_marker: START_MARKER.to_string(),
            end_marker: END_MARKER.to_string(),
        }
    }

    pub fn with_markers(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_marker = start.into();
        self.end_marker = end.into();
        self
    }

    pub fn bound(&self) -> i64 {
        self.bound
    }
}

impl Default for FizzBuzzScript {
    fn default() -> Self {
        Self::new(DRIVER_BOUND)
    }
}

#[async_trait]
impl Script for FizzBuzzScript {
    fn name(&self) -> &'static str {
        "fizzbuzz"
    }

    async fn run<W>(&self, sink: &mut LineSink<W>) -> Result<()>
    where
        W: AsyncWrite + Unpin + Send,
    {
        if self.bound <= 0 {
            tracing::warn!(bound = self.bound, "Non-positive bound, no labels will be written");
        }

        sink.write_line(&self.start_marker).await?;
        for label in fizzbuzz(self.bound) {
            let text = label.to_string();
            sink.write_line(&text).await?;
        }
        sink.write_line(&self.end_marker).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OutputFormat;

    async fn render(script: FizzBuzzScript, format: OutputFormat) -> (usize, String) {
        let mut sink = LineSink::new(Vec::new(), format);
        script.run(&mut sink).await.unwrap();
        let lines = sink.lines_written();
        let out = sink.finish().await.unwrap();
        (lines, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_driver_output() {
        let (lines, out) = render(FizzBuzzScript::default(), OutputFormat::Text).await;
        assert_eq!(lines, 17);
        assert_eq!(
            out,
            "Running FizzBuzz...\n1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\nFizzBuzz complete!\n"
        );
    }

    #[tokio::test]
    async fn test_non_positive_bound_keeps_markers() {
        let (lines, out) = render(FizzBuzzScript::new(0), OutputFormat::Text).await;
        assert_eq!(lines, 2);
        assert_eq!(out, "Running FizzBuzz...\nFizzBuzz complete!\n");

        let (lines, _) = render(FizzBuzzScript::new(-3), OutputFormat::Text).await;
        assert_eq!(lines, 2);
    }

    #[tokio::test]
    async fn test_custom_markers_in_json_lines() {
        let script = FizzBuzzScript::new(3).with_markers("begin", "end");
        let (_, out) = render(script, OutputFormat::JsonLines).await;
        assert_eq!(out, "\"begin\"\n\"1\"\n\"2\"\n\"Fizz\"\n\"end\"\n");
    }
}
