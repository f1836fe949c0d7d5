pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::scripts::{FizzBuzzScript, Rot13Script};
pub use config::ScriptsConfig;
pub use crate::core::{
    engine::{RunOutput, ScriptEngine},
    fizzbuzz::{fizzbuzz, label, labels, FizzBuzz, DEFAULT_BOUND},
    rot13::{rot13, rot13_char},
    sink::LineSink,
};
pub use domain::model::{Label, OutputFormat};
pub use domain::ports::Script;
pub use utils::error::{Result, ScriptError};
