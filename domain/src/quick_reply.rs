/// Suggestions offered under the chat input, in display order.
pub const QUICK_REPLIES: [&str; 4] = [
    "What's in my health record?",
    "Find a doctor near me",
    "Remind me about my medications",
    "I need an appointment",
];

pub fn builtin() -> Vec<String> {
    QUICK_REPLIES.iter().map(|s| s.to_string()).collect()
}
