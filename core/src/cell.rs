use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
///
/// A `Blank` cell carries no value and can never be marked; marking is the
/// one-way transition `Active(v)` -> `Marked(v)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Blank,
    Active(u8),
    Marked(u8),
}

impl Cell {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active(_) | Self::Marked(_))
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Marked(_))
    }

    pub const fn value(self) -> Option<u8> {
        match self {
            Self::Blank => None,
            Self::Active(value) | Self::Marked(value) => Some(value),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Blank
    }
}
