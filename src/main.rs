use clap::Parser;
use pattern_demos::utils::error::ErrorSeverity;
use pattern_demos::utils::logger;
use pattern_demos::{run_student_demo, CliArgs, DatabaseConnection};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            let exit_code = match e.severity() {
                ErrorSeverity::Critical => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    };

    let db = DatabaseConnection::instance(&config).await;

    let mut stdout = std::io::stdout().lock();
    run_student_demo(db, &mut stdout).await?;

    db.close().await;
    Ok(())
}
