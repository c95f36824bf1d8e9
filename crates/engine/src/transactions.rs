//! Transaction primitives.
//!
//! A `Transaction` is a ledger entry owned by a single user. Its kind decides
//! whether the value is added to or subtracted from the user balance.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Outcome,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outcome => "outcome",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(EngineError::InvalidKind(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub value: f64,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(title: String, value: f64, kind: TransactionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            value,
            kind,
        }
    }
}
