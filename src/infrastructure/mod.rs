//! Browser-facing adapters: HTTP, canvas rendering, export and console logging.

pub mod export;
pub mod http;
pub mod rendering;
pub mod services;
