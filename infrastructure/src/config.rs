use anyhow::Context;
use domain::conversation::DEFAULT_ASSISTANT_NAME;
use dotenvy::dotenv;
use shared::types::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub reply_delay: Duration,
    pub assistant_name: String,
    pub intents_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            intents_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; `load` feeds it the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let reply_delay = match lookup("MEDASSIST_REPLY_DELAY_MS") {
            Some(raw) => {
                let ms: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("MEDASSIST_REPLY_DELAY_MS is not a number: {raw:?}"))?;
                Duration::from_millis(ms)
            }
            None => defaults.reply_delay,
        };

        let assistant_name = lookup("MEDASSIST_ASSISTANT_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or(defaults.assistant_name);

        let intents_path = lookup("MEDASSIST_INTENTS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            reply_delay,
            assistant_name,
            intents_path,
        })
    }
}
