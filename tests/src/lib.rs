//! Helpers shared by the workspace-level behaviour tests.

use application::chat_service::ChatService;
use application::chat_session::ChatSession;
use domain::message::{Message, Sender};
use infrastructure::config::Config;
use std::time::Duration;

/// A session on the built-in intent table with the default 1500 ms delay.
pub fn default_session() -> ChatSession {
    ChatService::with_table(Config::default(), domain::intent::IntentTable::builtin())
        .open_session()
}

pub fn session_with_delay(delay: Duration) -> ChatSession {
    let config = Config {
        reply_delay: delay,
        ..Config::default()
    };
    ChatService::with_table(config, domain::intent::IntentTable::builtin()).open_session()
}

/// Submit `text` and wait until the reply has been appended.
pub async fn turn(session: &ChatSession, text: &str) {
    session
        .send(text)
        .unwrap_or_else(|err| panic!("submission of {text:?} refused: {err}"));
    session.wait_idle().await;
}

/// (sender, text) pairs; ids and timestamps differ between otherwise equal logs.
pub fn contents(messages: &[Message]) -> Vec<(Sender, String)> {
    messages
        .iter()
        .map(|m| (m.sender(), m.text().to_string()))
        .collect()
}
