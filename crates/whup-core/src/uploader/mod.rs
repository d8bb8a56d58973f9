//! The uploader: one blocking HTTP PUT per record, then routing to exactly
//! one of the two outgoing sinks.
//!
//! Classification is transport-only: a PUT that completes is a success no
//! matter what status code the server returned (4xx/5xx included). That
//! mirrors the upstream pipeline component this replaces; the status code is
//! logged at debug level so it is at least visible. Only an error raised by
//! the HTTP client itself routes the record to `failure`.

mod error;
mod put;

pub use error::TransportError;
pub use put::put_bytes;

use crate::config::UploaderConfig;
use crate::record::Record;
use crate::route::Routes;
use crate::target;
use anyhow::Result;

/// Which sink received the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Uploads records to `<base_url><output_directory>/<name>` with a fixed
/// query parameter set. Holds only immutable configuration and the two
/// outgoing routes, so one instance can serve concurrent callers; each
/// `upload` is self-contained and blocks its calling thread for the duration
/// of the single HTTP round trip.
pub struct Uploader {
    config: UploaderConfig,
    routes: Routes,
}

impl Uploader {
    /// Builds an uploader after validating the configuration (all fields
    /// non-empty). Configuration is immutable from here on.
    pub fn new(config: UploaderConfig, routes: Routes) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, routes })
    }

    pub fn config(&self) -> &UploaderConfig {
        &self.config
    }

    /// Uploads one record and transfers it to exactly one sink.
    ///
    /// One network write, no retries, no local state. A transport failure is
    /// terminal for the record: it goes to `failure` with the error logged,
    /// payload intact.
    pub fn upload(&self, record: Record) -> Outcome {
        let url = target::target_url(&self.config, record.name());
        match put_bytes(&url, record.payload()) {
            Ok(status) => {
                tracing::debug!("PUT {} -> HTTP {}", url, status);
                tracing::info!(
                    "uploaded {} ({} bytes), transferring to success",
                    record.name(),
                    record.len()
                );
                self.routes.success.accept(record);
                Outcome::Success
            }
            Err(e) => {
                tracing::warn!("upload of {} failed, transferring to failure", record.name());
                tracing::error!("{}", e);
                self.routes.failure.accept(record);
                Outcome::Failure
            }
        }
    }
}
