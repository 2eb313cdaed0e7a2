use serde::{Deserialize, Serialize};

/// Input event delivered to widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Scroll by a signed number of lines.
    Scroll(i32),
    Click { x: f64, y: f64 },
    Key(String),
}

impl Event {
    /// Short event name, as hosts report it.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Scroll(_) => "scroll",
            Event::Click { .. } => "click",
            Event::Key(_) => "key",
        }
    }

    /// Integer payload, if the event carries one.
    pub fn retrieve_int(&self) -> Option<i32> {
        match self {
            Event::Scroll(amount) => Some(*amount),
            Event::Click { .. } | Event::Key(_) => None,
        }
    }
}
