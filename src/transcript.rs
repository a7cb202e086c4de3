use crate::models::Message;
#[cfg(test)]
use crate::models::Sender;

/// Append-only chat history, oldest first, that always opens with a greeting.
#[derive(Debug, Clone)]
pub struct Transcript {
    greeting: &'static str,
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new(greeting: &'static str) -> Self {
        Self {
            greeting,
            messages: vec![Message::ai(greeting)],
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages.push(Message::ai(self.greeting));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg(test)]
    pub fn count_from(&self, sender: Sender) -> usize {
        self.messages.iter().filter(|m| m.sender == sender).count()
    }
}
