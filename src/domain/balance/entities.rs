use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Balances block of one account. Only `current` is read.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Balances {
    pub current: f64,
}

/// One account as returned by the balance endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub name: String,
    pub balances: Balances,
}

impl AccountBalance {
    pub fn new(name: impl Into<String>, current: f64) -> Self {
        Self { name: name.into(), balances: Balances::new(current) }
    }

    pub fn current(&self) -> f64 {
        self.balances.current
    }
}
