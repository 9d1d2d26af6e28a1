//! Gallery driver: configuration, user-facing feedback lines and the demo run.

pub mod config;
pub mod driver;
pub mod feedback;

pub use config::AppConfig;
pub use driver::{demo_items, run};
