use crate::domain::{
    balance::{BalanceRepository, transform_accounts},
    chart::LoadState,
    logging::{LogComponent, LogLevel, get_logger},
};
use crate::{log_debug, log_info};

/// Fetch balances once and turn them into the chart's load state
pub struct LoadBalancesUseCase<R: BalanceRepository> {
    repository: R,
}

impl<R: BalanceRepository> LoadBalancesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Never fails: every error ends up in `LoadState::Failed`
    pub async fn execute(&self, token: &str) -> LoadState {
        log_info!(LogComponent::Application("LoadBalances"), "📡 Loading account balances");

        match self.repository.fetch_accounts(token).await {
            Ok(accounts) => {
                let pairs = transform_accounts(&accounts);
                log_debug!(
                    LogComponent::Application("LoadBalances"),
                    "✅ transformed {} accounts: {:?}",
                    pairs.len(),
                    pairs
                );
                LoadState::Loaded(pairs)
            }
            Err(error) => {
                get_logger().log_with_metadata(
                    LogLevel::Error,
                    LogComponent::Application("LoadBalances"),
                    &format!("❌ Balance load failed: {error}"),
                    error.kind(),
                );
                LoadState::Failed(error)
            }
        }
    }
}
