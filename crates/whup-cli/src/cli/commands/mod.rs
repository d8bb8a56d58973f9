mod config;
mod put;

pub use config::run_config;
pub use put::run_put;
