use std::env;

use crate::error::{Result, ScoutError};
use crate::model::RecordMeta;

const SPORTMONKS_API_TOKEN: &str = "SPORTMONKS_API_TOKEN";
const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
const STREAK_WINDOW: &str = "STREAK_WINDOW";

/// Streak window used when `STREAK_WINDOW` is not set.
pub const DEFAULT_WINDOW: usize = 2;

/// Runtime configuration, read once at startup.
///
/// A missing credential aborts the run before any network activity.
#[derive(Debug, Clone)]
pub struct Config {
    pub sportmonks_token: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub window: usize,
    pub record_meta: RecordMeta,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let window = match env::var(STREAK_WINDOW) {
            Ok(raw) => parse_window(&raw)?,
            Err(_) => DEFAULT_WINDOW,
        };
        Ok(Self {
            sportmonks_token: require(SPORTMONKS_API_TOKEN)?,
            telegram_bot_token: require(TELEGRAM_BOT_TOKEN)?,
            telegram_chat_id: require(TELEGRAM_CHAT_ID)?,
            window,
            // The 2-match variant also reports when each flagged team
            // plays today; wider windows report the team name only.
            record_meta: if window == DEFAULT_WINDOW {
                RecordMeta::Kickoff
            } else {
                RecordMeta::TeamOnly
            },
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| ScoutError::MissingEnv(name))
}

fn parse_window(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(window) if window > 0 => Ok(window),
        _ => Err(ScoutError::InvalidEnv {
            name: STREAK_WINDOW,
            value: raw.to_string(),
        }),
    }
}
