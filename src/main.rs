use clap::Parser;
use mindset_survey::utils::error::ErrorSeverity;
use mindset_survey::utils::{logger, validation::Validate};
use mindset_survey::{web, AppConfig, AppError, CliConfig, SurveyService};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting mindset-survey");

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ mindset-survey failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: &CliConfig) -> Result<(), AppError> {
    // 載入並驗證配置
    let config: AppConfig = cli.load()?;
    config.validate()?;
    tracing::debug!("Effective config: {:?}", config);

    if !config.advice.has_api_key() {
        tracing::warn!(
            "⚠️ {} is not set, every survey will show local guidance",
            mindset_survey::config::API_KEY_ENV
        );
    }

    let addr = config.server.socket_addr()?;
    let service = SurveyService::from_settings(config.advice)?;
    let app = web::router(service);

    web::start_server(addr, app).await
}
