use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One entry of the FizzBuzz sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(u64),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Fizz => f.write_str("Fizz"),
            Label::Buzz => f.write_str("Buzz"),
            Label::FizzBuzz => f.write_str("FizzBuzz"),
            Label::Number(n) => write!(f, "{}", n),
        }
    }
}

// Serialized as the rendered text so JSON output matches the text output.
impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Each record written verbatim on its own line.
    #[default]
    Text,
    /// Each record written as a JSON string literal on its own line.
    JsonLines,
}
