use strum::IntoStaticStr;

use crate::domain::balance::ChartPair;
use crate::domain::errors::BalanceError;

/// Fetch lifecycle of the chart. Only `Loaded` draws anything.
#[derive(Debug, Clone, PartialEq, Default, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ChartPair>),
    Failed(BalanceError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// Series to draw, if any
    pub fn chart_data(&self) -> Option<&[ChartPair]> {
        match self {
            LoadState::Loaded(pairs) => Some(pairs),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&BalanceError> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn phase(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loaded_exposes_chart_data() {
        assert!(LoadState::Idle.chart_data().is_none());
        assert!(LoadState::Loading.chart_data().is_none());
        assert!(LoadState::Failed(BalanceError::Timeout(10)).chart_data().is_none());
        let loaded = LoadState::Loaded(vec![ChartPair::new("Checking", 1.0)]);
        assert_eq!(loaded.chart_data().map(|d| d.len()), Some(1));
    }

    #[test]
    fn phase_names_are_snake_case() {
        assert_eq!(LoadState::Loaded(Vec::new()).phase(), "loaded");
        assert_eq!(LoadState::Failed(BalanceError::Decode("x".into())).phase(), "failed");
    }
}
