use super::AccountBalance;
use crate::domain::errors::BalanceResult;

/// Source of account balances.
///
/// `token` is the session token handed to the chart; implementations decide
/// whether it travels with the request.
#[allow(async_fn_in_trait)]
pub trait BalanceRepository {
    async fn fetch_accounts(&self, token: &str) -> BalanceResult<Vec<AccountBalance>>;
}
