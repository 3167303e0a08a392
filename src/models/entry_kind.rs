use serde::{Deserialize, Serialize};

/// Direction of a clock event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl EntryKind {
    /// Kind expected at `index` in an alternating log (even → IN, odd → OUT).
    pub fn for_position(index: usize) -> Self {
        if index % 2 == 0 {
            EntryKind::In
        } else {
            EntryKind::Out
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::In => "IN",
            EntryKind::Out => "OUT",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EntryKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EntryKind::Out)
    }
}
