pub mod config;
pub mod logging;

pub mod record;
pub mod route;
pub mod target;
pub mod uploader;
