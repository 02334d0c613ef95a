use crate::domain::chart::PieChartOptions;
use crate::infrastructure::{export::DEFAULT_EXPORT_FILENAME, http::BalanceClientConfig};

pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 500;

/// Everything the `NetWorthChart` component can be tuned with
#[derive(Debug, Clone, PartialEq)]
pub struct NetWorthChartConfig {
    pub client: BalanceClientConfig,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub options: PieChartOptions,
    pub export_filename: String,
}

impl Default for NetWorthChartConfig {
    fn default() -> Self {
        Self {
            client: BalanceClientConfig::default(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            options: PieChartOptions::default(),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl NetWorthChartConfig {
    pub fn with_client(mut self, client: BalanceClientConfig) -> Self {
        self.client = client;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }
}
