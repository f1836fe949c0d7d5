use clap::Parser;
use small_scripts::app::run_command;
use small_scripts::utils::error::ScriptError;
use small_scripts::utils::{logger, validation::Validate};
use small_scripts::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    if let Err(e) = run_command(&cli.command(), &config, tokio::io::stdout()).await {
        fail(e);
    }
}

fn fail(e: ScriptError) -> ! {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    let exit_code = e.severity().exit_code();
    if exit_code > 0 {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
    }
    std::process::exit(exit_code);
}
