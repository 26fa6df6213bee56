//! Tower identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three towers tracked by the demand table.
///
/// # Examples
///
/// ```
/// use demanda::primitives::Tower;
///
/// assert_eq!(Tower::B.index(), 1);
/// assert_eq!(Tower::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tower {
    /// Tower A (first column of the demand file).
    A,
    /// Tower B (second column).
    B,
    /// Tower C (third column).
    C,
}

impl Tower {
    /// All towers, in column order.
    pub const ALL: [Tower; 3] = [Tower::A, Tower::B, Tower::C];

    /// Zero-based lane index of this tower.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Tower::A => 0,
            Tower::B => 1,
            Tower::C => 2,
        }
    }

    /// Short display label ("A", "B", "C").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tower::A => "A",
            Tower::B => "B",
            Tower::C => "C",
        }
    }
}

impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
