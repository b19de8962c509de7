//! Common types and data structures

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Declarative description of one rendered widget.
///
/// Views describe what they draw so the structure can be checked without a
/// running window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    TextInput,
    IconButton(&'static str),
    TextLine(String),
    Button(&'static str),
}

/// What the user asked for during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    Greet,
}

/// Messages raised by the backend for the host to display.
///
/// Cloning shares the same queue.
#[derive(Clone, Default)]
pub struct Alerts {
    queue: Arc<Mutex<VecDeque<String>>>,
}

impl Alerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message. Returns false if the queue is poisoned.
    pub fn push(&self, message: impl Into<String>) -> bool {
        match self.queue.lock() {
            Ok(mut queue) => {
                queue.push_back(message.into());
                true
            }
            Err(_) => false,
        }
    }

    /// Take the oldest pending alert
    pub fn pop(&self) -> Option<String> {
        self.queue.lock().ok().and_then(|mut queue| queue.pop_front())
    }

    pub fn len(&self) -> usize {
        self.queue.lock().map(|queue| queue.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
