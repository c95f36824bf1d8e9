//! Per-user balance.

use serde::Serialize;

use crate::{Transaction, TransactionKind};

/// Totals over a user ledger.
///
/// `credit` is always `incomes - outcomes`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Balance {
    pub incomes: f64,
    pub outcomes: f64,
    pub credit: f64,
}

impl Balance {
    pub fn of<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let (incomes, outcomes) =
            transactions
                .into_iter()
                .fold((0.0, 0.0), |(incomes, outcomes), tx| match tx.kind {
                    TransactionKind::Income => (incomes + tx.value, outcomes),
                    TransactionKind::Outcome => (incomes, outcomes + tx.value),
                });

        Self {
            incomes,
            outcomes,
            credit: incomes - outcomes,
        }
    }
}
