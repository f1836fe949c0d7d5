use crate::config::toml_config::ScriptsConfig;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::validate_path;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-scripts")]
#[command(about = "ROT13 decoder and FizzBuzz printer")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output encoding for each line written to stdout
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Apply ROT13 to TEXT, or decode the built-in message
    Rot13 {
        text: Option<String>,
    },
    /// Print the FizzBuzz sequence between its markers
    Fizzbuzz {
        #[arg(short, long, allow_negative_numbers = true)]
        bound: Option<i64>,
    },
    /// Run the rot13 driver, then the fizzbuzz driver
    All,
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::All)
    }

    /// Loads the config file if one was given and layers the flags on top.
    pub fn resolve(&self) -> Result<ScriptsConfig> {
        let mut config = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                ScriptsConfig::from_file(path)?
            }
            None => ScriptsConfig::default(),
        };

        if let Some(format) = self.format {
            config.output.format = format;
        }
        match self.command() {
            Command::Rot13 { text: Some(text) } => config.rot13.message = text,
            Command::Fizzbuzz { bound: Some(bound) } => config.fizzbuzz.bound = bound,
            _ => {}
        }

        Ok(config)
    }
}
