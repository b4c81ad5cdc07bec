use thiserror::Error;

/// Reasons a submission is refused. A refused submission never touches the log.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyInput,

    #[error("a reply is still pending")]
    Busy,

    #[error("chat session is closed")]
    Closed,

    #[error("no async runtime to schedule the reply on")]
    NoRuntime,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error("intent category '{0}' has no keywords")]
    NoKeywords(String),

    #[error("intent category '{label}' has a blank keyword")]
    BlankKeyword { label: String },

    #[error("fallback response is empty")]
    EmptyFallback,
}
