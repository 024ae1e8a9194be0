use clap::Parser;
use datetime_widget::app::runner::{self, RunOptions};
use datetime_widget::core::clock::parse_instant;
use datetime_widget::utils::error::{ErrorSeverity, WidgetError};
use datetime_widget::utils::{logger, validation::Validate};
use datetime_widget::{CliConfig, ClockSettings, TickReport, TomlConfig};

fn exit_with(e: &WidgetError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn run_with<S: ClockSettings + Validate>(settings: &S, options: RunOptions) -> TickReport {
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    match runner::run(settings, options).await {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    }
}

#[tokio::main]
async fn main() {
    let args = CliConfig::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting datetime-widget");
    tracing::debug!("CLI config: {:?}", args);

    let at = match args.at.as_deref().map(parse_instant).transpose() {
        Ok(at) => at,
        Err(e) => exit_with(&e),
    };
    let options = RunOptions {
        ticks: args.tick_limit(),
        at,
    };

    let report = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => exit_with(&e),
            };
            args.apply_overrides(&mut config);
            run_with(&config, options).await
        }
        None => run_with(&args, options).await,
    };

    if report.failures > 0 {
        tracing::warn!(
            "⚠️ {} of {} ticks failed",
            report.failures,
            report.ticks
        );
        std::process::exit(2);
    }
}
