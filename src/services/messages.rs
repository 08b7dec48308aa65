use super::MessageSink;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Default number of messages retained.
///
pub const MESSAGE_CAPACITY: usize = 100;

/// Notification shown to the user.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub created_at: DateTime<Local>,
}

/// In-memory message log shared by the components and the UI. Only the
/// newest `capacity` messages are kept.
///
pub struct MessageService {
    entries: Mutex<VecDeque<Message>>,
    capacity: usize,
}

impl Default for MessageService {
    fn default() -> Self {
        MessageService {
            entries: Mutex::new(VecDeque::new()),
            capacity: MESSAGE_CAPACITY,
        }
    }
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Return up to `limit` of the newest messages, newest first.
    ///
    pub fn recent(&self, limit: usize) -> Vec<Message> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().rev().take(limit).cloned().collect(),
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageSink for MessageService {
    fn add_message(&self, text: &str) {
        log::info!("{}", text);
        if let Ok(mut entries) = self.entries.lock() {
            while entries.len() >= self.capacity {
                entries.pop_front();
            }
            entries.push_back(Message {
                text: text.to_owned(),
                created_at: Local::now(),
            });
        }
    }
}
