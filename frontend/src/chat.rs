use chrono::{Local, NaiveTime};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Sender {
    /// The visitor typing into the widget.
    #[serde(rename = "self")]
    Visitor,
    /// The canned agent persona.
    #[serde(rename = "other")]
    Agent,
}

/// A canned message shown when the widget mounts. Ids are assigned on load.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SeedMessage {
    pub text: String,
    pub sender: Sender,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub sender: Sender,
    pub time: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
}

impl WidgetState {
    pub fn toggled(self) -> Self {
        match self {
            WidgetState::Closed => WidgetState::Open,
            WidgetState::Open => WidgetState::Closed,
        }
    }
}

/// What a key press inside the message box should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    Submit,
    PassThrough,
}

pub fn key_intent(key: &str, shift_held: bool) -> KeyIntent {
    if key == "Enter" && !shift_held {
        KeyIntent::Submit
    } else {
        KeyIntent::PassThrough
    }
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Local-only chat state: panel visibility, the message log and the draft.
///
/// Messages are append-only. Ids come from a counter that starts after the
/// seed messages, which matches `len + 1` as long as nothing is ever removed.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    state: WidgetState,
    messages: Vec<ChatMessage>,
    draft: String,
    next_id: u32,
}

impl ChatSession {
    pub fn new(seed: &[SeedMessage]) -> Self {
        let messages: Vec<ChatMessage> = seed
            .iter()
            .zip(1..)
            .map(|(message, id)| ChatMessage {
                id,
                text: message.text.clone(),
                sender: message.sender,
                time: message.time.clone(),
            })
            .collect();
        let next_id = messages.len() as u32 + 1;

        Self {
            state: WidgetState::Closed,
            messages,
            draft: String::new(),
            next_id,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == WidgetState::Open
    }

    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }

    pub fn close(&mut self) {
        self.state = WidgetState::Closed;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Sends the draft, stamped with the local wall clock.
    pub fn submit(&mut self) -> Option<&ChatMessage> {
        self.submit_at(Local::now().time())
    }

    /// Appends the draft as a visitor message. Blank drafts are ignored and
    /// left in the input box.
    pub fn submit_at(&mut self, now: NaiveTime) -> Option<&ChatMessage> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.draft);
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender: Sender::Visitor,
            time: format_time(now),
        });
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<SeedMessage> {
        vec![
            SeedMessage {
                text: "Здравствуйте!".to_string(),
                sender: Sender::Agent,
                time: "14:30".to_string(),
            },
            SeedMessage {
                text: "Когда сможете начать?".to_string(),
                sender: Sender::Visitor,
                time: "14:32".to_string(),
            },
        ]
    }

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn seed_messages_get_sequential_ids() {
        let session = ChatSession::new(&seed());
        let ids: Vec<u32> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(!session.is_open());
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut session = ChatSession::new(&seed());
        for draft in ["", "   ", "\n\t "] {
            session.set_draft(draft.to_string());
            assert!(session.submit_at(at(9, 0)).is_none());
            assert_eq!(session.messages().len(), 2);
            assert_eq!(session.draft(), draft);
        }
    }

    #[test]
    fn submission_appends_visitor_message_and_clears_draft() {
        let mut session = ChatSession::new(&seed());
        session.set_draft("Hello".to_string());

        let sent = session.submit_at(at(9, 5)).cloned().unwrap();
        assert_eq!(sent.id, 3);
        assert_eq!(sent.text, "Hello");
        assert_eq!(sent.sender, Sender::Visitor);
        assert_eq!(sent.time, "09:05");
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn text_is_kept_as_typed() {
        let mut session = ChatSession::new(&[]);
        session.set_draft("  line one\nline two ".to_string());
        let sent = session.submit_at(at(23, 59)).cloned().unwrap();
        assert_eq!(sent.id, 1);
        assert_eq!(sent.text, "  line one\nline two ");
    }

    #[test]
    fn repeated_submissions_keep_order_and_increase_ids() {
        let mut session = ChatSession::new(&seed());
        let texts = ["a", "b", "a", "c", "a"];
        for text in texts {
            session.set_draft(text.to_string());
            session.submit_at(at(12, 0));
        }

        let messages = session.messages();
        assert_eq!(messages.len(), 2 + texts.len());
        assert!(messages.windows(2).all(|pair| pair[0].id < pair[1].id));
        let sent: Vec<&str> = messages[2..].iter().map(|m| m.text.as_str()).collect();
        assert_eq!(sent, texts);
    }

    #[test]
    fn toggling_twice_keeps_history() {
        let mut session = ChatSession::new(&seed());
        session.toggle();
        assert!(session.is_open());
        session.set_draft("Hi".to_string());
        session.submit_at(at(10, 0));
        let before = session.messages().to_vec();

        session.toggle();
        assert!(!session.is_open());
        session.toggle();
        session.toggle();
        assert!(!session.is_open());
        assert_eq!(session.messages(), before.as_slice());
    }

    #[test]
    fn close_forces_closed() {
        let mut session = ChatSession::new(&seed());
        session.close();
        assert!(!session.is_open());
        session.toggle();
        session.close();
        assert!(!session.is_open());
    }

    #[test]
    fn enter_without_shift_submits() {
        assert_eq!(key_intent("Enter", false), KeyIntent::Submit);
        assert_eq!(key_intent("Enter", true), KeyIntent::PassThrough);
        assert_eq!(key_intent("a", false), KeyIntent::PassThrough);
        assert_eq!(key_intent("Escape", false), KeyIntent::PassThrough);
    }

    #[test]
    fn sender_reads_self_and_other() {
        let seed: SeedMessage =
            serde_json::from_str(r#"{"text":"hi","sender":"other","time":"14:30"}"#).unwrap();
        assert_eq!(seed.sender, Sender::Agent);
        let visitor: Sender = serde_json::from_str("\"self\"").unwrap();
        assert_eq!(visitor, Sender::Visitor);
    }
}
