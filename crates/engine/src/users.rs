//! The module contains the definition of a user and its CPF.

use core::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::Transaction;

/// Brazilian individual taxpayer number.
///
/// Stored as its digits only: formatting characters are stripped on parse, so
/// `"123.456.789-09"` and `12345678909` are the same CPF. Equality and
/// uniqueness always compare the normalized digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Normalizes `raw` into a CPF.
    ///
    /// Returns `None` when `raw` carries no digit at all, which callers treat
    /// as an absent CPF.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        (!digits.is_empty()).then_some(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered user and the ledger it owns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub cpf: Cpf,
    pub email: String,
    pub age: u32,
    pub transactions: Vec<Transaction>,
}

impl User {
    pub fn new(name: String, cpf: Cpf, email: String, age: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            cpf,
            email,
            age,
            transactions: Vec::new(),
        }
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|tx| tx.id == id)
    }
}
