use serde::{Deserialize, Serialize};

/// Value Object - one chart slice as `[label, value]`
///
/// Serialises as a two element JSON array, the shape chart series take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPair(String, f64);

impl ChartPair {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self(label.into(), value)
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

impl From<(&str, f64)> for ChartPair {
    fn from((label, value): (&str, f64)) -> Self {
        Self::new(label, value)
    }
}
