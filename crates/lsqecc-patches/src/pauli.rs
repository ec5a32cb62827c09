//! Pauli operators labelling patch faces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SliceError;

/// Logical operator type of a patch face.
///
/// A route attaches to the face of a patch whose boundary carries the
/// requested operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PauliOperator {
    X,
    Y,
    Z,
}

impl PauliOperator {
    /// All operators.
    pub const ALL: [PauliOperator; 3] = [PauliOperator::X, PauliOperator::Y, PauliOperator::Z];
}

impl fmt::Display for PauliOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PauliOperator::X => "X",
            PauliOperator::Y => "Y",
            PauliOperator::Z => "Z",
        };
        f.write_str(s)
    }
}

impl FromStr for PauliOperator {
    type Err = SliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(PauliOperator::X),
            "Y" | "y" => Ok(PauliOperator::Y),
            "Z" | "z" => Ok(PauliOperator::Z),
            other => Err(SliceError::InvalidOperator(other.to_string())),
        }
    }
}
