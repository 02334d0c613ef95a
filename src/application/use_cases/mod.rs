pub mod load_balances;

pub use load_balances::*;
