use clap::Parser;
use model_override::app::harness;
use model_override::utils::{logger, validation::Validate};
use model_override::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if settings.json_logs() {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting model-override");
    tracing::debug!("Settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    match harness::run(&settings) {
        Ok(result) => {
            if settings.dry_run {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            let failed = result.report.failed_writes();
            if failed > 0 {
                anyhow::bail!("{} property writes failed", failed);
            }
        }
        Err(e) => {
            tracing::error!("❌ Override run failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
