pub mod scripts;

#[cfg(feature = "cli")]
pub mod runner;

#[cfg(feature = "cli")]
pub use runner::run_command;
