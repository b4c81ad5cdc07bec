use crate::chat_session::{ChatSession, SessionOptions};
use domain::intent::{IntentTable, ReplyGenerator};
use infrastructure::config::Config;
use infrastructure::intent_store::resolve_intent_table;
use shared::types::Result;
use std::sync::Arc;

/// Opens chat sessions that share one intent table.
pub struct ChatService {
    config: Config,
    table: Arc<IntentTable>,
}

impl ChatService {
    pub fn new(config: Config) -> Result<Self> {
        let table = resolve_intent_table(config.intents_path.as_deref())?;
        Ok(Self::with_table(config, table))
    }

    pub fn with_table(config: Config, table: IntentTable) -> Self {
        Self {
            config,
            table: Arc::new(table),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn intent_table(&self) -> &IntentTable {
        &self.table
    }

    pub fn open_session(&self) -> ChatSession {
        let generator: Arc<dyn ReplyGenerator> = self.table.clone();
        tracing::debug!(delay = ?self.config.reply_delay, "opening chat session");
        ChatSession::new(generator, SessionOptions::from(&self.config))
    }
}
