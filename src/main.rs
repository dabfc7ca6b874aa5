use tracing::{info, warn};

use btts_scout::{report, scan};
use btts_scout::{Config, SportmonksClient, StreakEvaluator, TelegramNotifier};

#[tokio::main]
async fn main() -> btts_scout::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!(window = config.window, "starting BTTS streak scan");

    let client = SportmonksClient::new(&config.sportmonks_token)?;
    let evaluator = StreakEvaluator::new(&client, config.window, config.record_meta);
    let notifier = TelegramNotifier::new(&config.telegram_bot_token, &config.telegram_chat_id)?;

    let message = match scan::scan_today(&client, &evaluator).await {
        Some(records) => {
            let qualifying: Vec<_> = records.into_iter().filter(|r| r.qualifies).collect();
            info!(qualifying = qualifying.len(), "scan complete");
            report::build_report(&qualifying, config.window)
        }
        None => report::no_fixtures_message().to_string(),
    };

    if let Err(e) = notifier.send(&message).await {
        warn!(error = %e, "could not deliver notification");
    }
    Ok(())
}
