use crate::message::Message;

pub const DEFAULT_ASSISTANT_NAME: &str = "MedAssist";

pub fn greeting_for(assistant_name: &str) -> String {
    format!(
        "Hello! I'm {}, your personal healthcare assistant. How can I help you today?",
        assistant_name
    )
}

/// Ordered, append-only record of a chat. Insertion order is display order.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// A log seeded with the assistant's greeting.
    pub fn seeded(assistant_name: &str) -> Self {
        Self {
            messages: vec![Message::assistant(greeting_for(assistant_name))],
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::seeded(DEFAULT_ASSISTANT_NAME)
    }
}
