use chrono::Local;
use colored::Colorize;
use crossterm::{
    cursor, execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use domain::message::{Message, Sender};
use std::io::{self, stdout, Write};

pub fn print_header(assistant_name: &str) {
    println!("{}", format!("{} Chat", assistant_name).bold().cyan());
    println!("{}", "Ask me anything about your health".dimmed());
    println!(
        "{}",
        "Commands: /quick for suggestions, /history to reprint, exit to leave.".dimmed()
    );
    println!();
}

pub fn format_message(message: &Message, assistant_name: &str) -> String {
    let time = message
        .timestamp()
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();
    match message.sender() {
        Sender::User => format!(
            "{} {} {}",
            format!("[{}]", time).dimmed(),
            "You:".cyan().bold(),
            message.text()
        ),
        Sender::Assistant => format!(
            "{} {} {}",
            format!("[{}]", time).dimmed(),
            format!("{}:", assistant_name).green().bold(),
            message.text()
        ),
    }
}

pub fn print_message(message: &Message, assistant_name: &str) {
    println!("{}", format_message(message, assistant_name));
}

pub fn print_transcript(messages: &[Message], assistant_name: &str) {
    for message in messages {
        print_message(message, assistant_name);
    }
}

/// Busy indicator; stays on the current line until `clear_line` is called.
pub fn show_typing(assistant_name: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(
        out,
        Print(format!("{} is typing...", assistant_name).dimmed())
    )?;
    out.flush()
}

pub fn clear_line() -> io::Result<()> {
    execute!(stdout(), cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))
}

/// Remove the prompt's echo of what the user just typed.
pub fn erase_previous_line() -> io::Result<()> {
    execute!(stdout(), cursor::MoveUp(1), Clear(ClearType::CurrentLine))
}
