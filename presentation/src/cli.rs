use crate::notifier::ConsoleNotifier;
use crate::render;
use anyhow::Context;
use application::chat_service::ChatService;
use application::chat_session::ChatSession;
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use domain::error::ChatError;
use domain::message::{Message, Sender};
use domain::notification::{NotificationKind, Notifier};
use infrastructure::config::Config;
use shared::types::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::broadcast::{self, error::RecvError};

#[derive(Parser, Debug)]
#[command(name = "medassist")]
#[command(about = "MedAssist healthcare chat assistant (scripted replies)")]
pub struct Cli {
    /// Simulated reply latency in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// JSON file with a custom intent table
    #[arg(long)]
    pub intents: Option<PathBuf>,

    /// Write the conversation as JSON to this file on exit
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Send one message, print the reply and exit
    #[arg(trailing_var_arg = true)]
    pub message: Vec<String>,
}

enum Command {
    Exit,
    Quick,
    History,
    Help,
    Say(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            Command::Exit
        } else if trimmed == "/quick" {
            Command::Quick
        } else if trimmed == "/history" {
            Command::History
        } else if trimmed == "/help" {
            Command::Help
        } else {
            Command::Say(input.to_string())
        }
    }
}

pub struct CliApp {
    notifier: ConsoleNotifier,
}

impl CliApp {
    pub fn new() -> Self {
        Self {
            notifier: ConsoleNotifier::new(),
        }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(ms) = cli.delay_ms {
            config.reply_delay = Duration::from_millis(ms);
        }
        if let Some(path) = cli.intents.clone() {
            config.intents_path = Some(path);
        }

        let service = ChatService::new(config)?;
        let session = service.open_session();
        let name = service.config().assistant_name.clone();

        let message = cli.message.join(" ");
        if message.trim().is_empty() {
            self.handle_chat(&session, &name).await?;
        } else {
            self.handle_one_shot(&session, &name, message).await?;
        }

        if let Some(path) = cli.transcript.as_deref() {
            match save_transcript(path, &session.messages()) {
                Ok(()) => self.notifier.notify(
                    NotificationKind::Success,
                    &format!("Transcript saved to {}", path.display()),
                ),
                Err(err) => self
                    .notifier
                    .notify(NotificationKind::Error, &format!("{:#}", err)),
            }
        }

        session.close();
        Ok(())
    }

    async fn handle_one_shot(&self, session: &ChatSession, name: &str, message: String) -> Result<()> {
        let mut events = session.subscribe();
        match session.send(message) {
            Ok(_) => self.follow_turn(session, name, &mut events, false).await,
            Err(err) => {
                self.notifier.notify(NotificationKind::Error, &err.to_string());
                Ok(())
            }
        }
    }

    async fn handle_chat(&self, session: &ChatSession, name: &str) -> Result<()> {
        render::print_header(name);
        render::print_transcript(&session.messages(), name);
        let mut events = session.subscribe();

        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;

            let submitted = match Command::parse(&input) {
                Command::Exit => break,
                Command::History => {
                    render::print_transcript(&session.messages(), name);
                    continue;
                }
                Command::Help => {
                    render::print_header(name);
                    continue;
                }
                Command::Quick => {
                    let replies = session.quick_replies();
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt("Suggestions")
                        .items(replies)
                        .default(0)
                        .interact_opt()?;
                    match choice {
                        Some(index) => session.select_quick_reply(&replies[index]),
                        None => continue,
                    }
                }
                Command::Say(text) => session.send(text),
            };

            match submitted {
                Ok(_) => self.follow_turn(session, name, &mut events, true).await?,
                // Blank input is ignored without feedback.
                Err(ChatError::EmptyInput) => continue,
                Err(ChatError::Busy) => self
                    .notifier
                    .notify(NotificationKind::Error, "Please wait for the current reply."),
                Err(ChatError::Closed) => break,
                Err(err @ ChatError::NoRuntime) => return Err(err.into()),
            }
        }

        println!("{}", "Goodbye.".dimmed());
        Ok(())
    }

    /// Render one turn from the session's append events: the user's message,
    /// the typing indicator while busy, then the reply.
    async fn follow_turn(
        &self,
        session: &ChatSession,
        name: &str,
        events: &mut broadcast::Receiver<Message>,
        erase_echo: bool,
    ) -> Result<()> {
        loop {
            let message = match events.recv().await {
                Ok(message) => message,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "renderer fell behind; reprinting transcript");
                    render::print_transcript(&session.messages(), name);
                    session.wait_idle().await;
                    return Ok(());
                }
                Err(RecvError::Closed) => return Ok(()),
            };

            match message.sender() {
                Sender::User => {
                    if erase_echo {
                        render::erase_previous_line()?;
                    }
                    render::print_message(&message, name);
                    render::show_typing(name)?;
                }
                Sender::Assistant => {
                    render::clear_line()?;
                    render::print_message(&message, name);
                    return Ok(());
                }
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

fn save_transcript(path: &Path, messages: &[Message]) -> Result<()> {
    let json = serde_json::to_string_pretty(messages)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }
    std::fs::write(path, json).with_context(|| format!("Failed to write transcript to {:?}", path))?;
    Ok(())
}
