//! Player-facing message lines produced by the core for the UI to display.

use serde::{Deserialize, Serialize};

/// Display-priority tag; the UI maps each tone to a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageTone {
    Welcome,
    Info,
    PlayerAttack,
    EnemyAttack,
    PlayerDie,
    EnemyDie,
    HealthRecovered,
    StatusEffect,
    Descend,
    Impossible,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub tone: MessageTone,
    pub count: u32,
}

impl Message {
    /// Text with a `(x3)` suffix when the line was repeated.
    pub fn full_text(&self) -> String {
        if self.count > 1 { format!("{} (x{})", self.text, self.count) } else { self.text.clone() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Appends a line, stacking it onto the previous one when the text repeats.
    pub fn add(&mut self, text: impl Into<String>, tone: MessageTone) {
        let text = text.into();
        if let Some(last) = self.messages.last_mut()
            && last.text == text
        {
            last.count += 1;
            return;
        }
        self.messages.push(Message { text, tone, count: 1 });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.messages.iter().any(|message| message.text.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lines_stack() {
        let mut log = MessageLog::default();
        log.add("The Ninja attacks Player but does no damage.", MessageTone::EnemyAttack);
        log.add("The Ninja attacks Player but does no damage.", MessageTone::EnemyAttack);
        log.add("You wait.", MessageTone::Info);

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].count, 2);
        assert_eq!(
            log.messages()[0].full_text(),
            "The Ninja attacks Player but does no damage. (x2)"
        );
        assert_eq!(log.last().map(Message::full_text).as_deref(), Some("You wait."));
    }
}
