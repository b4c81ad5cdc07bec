pub mod config;
pub mod intent_store;
