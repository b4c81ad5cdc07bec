//! One open chat view: the conversation log, the input buffer and the
//! single-flight reply scheduler.
//!
//! A submission appends the user's message right away and marks the session
//! busy. The assistant's reply is produced by a spawned task after a fixed
//! delay; until it lands every further submission is refused. Closing the
//! session (explicitly or by dropping it) drops a pending reply.

use domain::conversation::ConversationLog;
use domain::error::ChatError;
use domain::intent::ReplyGenerator;
use domain::message::{Message, MessageId};
use infrastructure::config::Config;
use shared::telemetry::Telemetry;
use shared::text::is_blank;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub reply_delay: Duration,
    pub assistant_name: String,
    pub quick_replies: Vec<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            reply_delay: config.reply_delay,
            assistant_name: config.assistant_name.clone(),
            quick_replies: domain::quick_reply::builtin(),
        }
    }
}

struct SessionState {
    log: ConversationLog,
    input: String,
    busy: bool,
    closed: bool,
}

struct Shared {
    state: Mutex<SessionState>,
    events: broadcast::Sender<Message>,
    busy: watch::Sender<bool>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct ChatSession {
    shared: Arc<Shared>,
    generator: Arc<dyn ReplyGenerator>,
    reply_delay: Duration,
    quick_replies: Vec<String>,
    cancel: CancellationToken,
}

impl ChatSession {
    pub fn new(generator: Arc<dyn ReplyGenerator>, options: SessionOptions) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let (busy, _) = watch::channel(false);
        let state = SessionState {
            log: ConversationLog::seeded(&options.assistant_name),
            input: String::new(),
            busy: false,
            closed: false,
        };
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                events,
                busy,
            }),
            generator,
            reply_delay: options.reply_delay,
            quick_replies: options.quick_replies,
            cancel: CancellationToken::new(),
        }
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.shared.lock().input = text.into();
    }

    pub fn input(&self) -> String {
        self.shared.lock().input.clone()
    }

    /// Submit the input buffer. The reply is scheduled on the caller's Tokio
    /// runtime; without one the submission is refused with `NoRuntime`.
    ///
    /// Rejections leave the session as it was.
    pub fn submit(&self) -> Result<MessageId, ChatError> {
        let runtime = Handle::try_current().map_err(|_| ChatError::NoRuntime)?;
        let (id, text) = {
            let mut state = self.shared.lock();
            if state.closed {
                return Err(ChatError::Closed);
            }
            if state.busy {
                tracing::debug!("submission refused while a reply is pending");
                return Err(ChatError::Busy);
            }
            if is_blank(&state.input) {
                return Err(ChatError::EmptyInput);
            }

            let text = std::mem::take(&mut state.input);
            let message = Message::user(text.clone());
            let id = message.id().clone();
            state.log.append(message.clone());
            state.busy = true;
            self.shared.busy.send_replace(true);
            let _ = self.shared.events.send(message);
            (id, text)
        };

        tracing::debug!(message_id = %id, "user message accepted");
        self.schedule_reply(&runtime, text);
        Ok(id)
    }

    pub fn send(&self, text: impl Into<String>) -> Result<MessageId, ChatError> {
        self.set_input(text);
        self.submit()
    }

    /// Put a suggestion's literal text in the buffer and submit it like typed input.
    pub fn select_quick_reply(&self, suggestion: &str) -> Result<MessageId, ChatError> {
        self.send(suggestion)
    }

    pub fn quick_replies(&self) -> &[String] {
        &self.quick_replies
    }

    pub fn is_busy(&self) -> bool {
        self.shared.lock().busy
    }

    pub fn is_closed(&self) -> bool {
        self.shared.lock().closed
    }

    /// Resolves once no reply is pending.
    pub async fn wait_idle(&self) {
        let mut rx = self.shared.busy.subscribe();
        let _ = rx.wait_for(|busy| !*busy).await;
    }

    pub fn messages(&self) -> Vec<Message> {
        self.shared.lock().log.all().to_vec()
    }

    pub fn len(&self) -> usize {
        self.shared.lock().log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.lock().log.is_empty()
    }

    /// Every message appended from now on, in log order.
    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.shared.events.subscribe()
    }

    pub fn close(&self) {
        let mut state = self.shared.lock();
        if state.closed {
            return;
        }
        if state.busy {
            tracing::info!("chat closed with a reply pending; dropping it");
        }
        state.closed = true;
        state.busy = false;
        self.cancel.cancel();
        self.shared.busy.send_replace(false);
    }

    fn schedule_reply(&self, runtime: &Handle, text: String) {
        let shared = Arc::clone(&self.shared);
        let generator = Arc::clone(&self.generator);
        let token = self.cancel.child_token();
        let delay = self.reply_delay;

        runtime.spawn(async move {
            let telemetry = Telemetry::new();
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(delay) => {}
            }

            let reply = Message::assistant(generator.reply(&text));
            let mut state = shared.lock();
            if state.closed {
                return;
            }
            state.log.append(reply.clone());
            state.busy = false;
            shared.busy.send_replace(false);
            let _ = shared.events.send(reply);
            drop(state);

            tracing::debug!(elapsed = ?telemetry.elapsed(), "assistant replied");
        });
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.close();
    }
}
