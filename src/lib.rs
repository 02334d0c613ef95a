use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::NetWorthChart;
use crate::config::NetWorthChartConfig;
use crate::domain::logging::{LogComponent, get_logger, init_logger, init_time_provider};
use crate::infrastructure::http::BalanceClientConfig;
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

/// Install panic hook, console logger and browser clock
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    };
    init_logger(Box::new(console_logger));
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Net worth chart initialized");
}

/// Mount the chart into `<body>` with the given session token
#[wasm_bindgen]
pub fn mount_net_worth_chart(token: String) {
    get_logger().debug(LogComponent::Presentation("Mount"), "🥧 Mounting NetWorthChart");
    mount_to_body(move || view! { <NetWorthChart token=token /> });
}

/// Mount the chart with a custom endpoint, token forwarding, timeout and canvas size
#[wasm_bindgen]
pub fn mount_net_worth_chart_with(
    token: String,
    endpoint: String,
    forward_token: bool,
    timeout_ms: Option<u32>,
    width: u32,
    height: u32,
) {
    let mut client = BalanceClientConfig::default()
        .with_endpoint(endpoint)
        .with_forward_token(forward_token);
    if let Some(timeout_ms) = timeout_ms {
        client = client.with_timeout(timeout_ms);
    }
    let config = NetWorthChartConfig::default().with_client(client).with_size(width, height);

    get_logger().debug(LogComponent::Presentation("Mount"), "🥧 Mounting configured NetWorthChart");
    mount_to_body(move || view! { <NetWorthChart token=token config=config /> });
}
