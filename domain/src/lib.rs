pub mod conversation;
pub mod error;
pub mod intent;
pub mod message;
pub mod notification;
pub mod quick_reply;
