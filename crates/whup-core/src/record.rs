//! The unit of data flowing through the pipeline: a named byte payload.

use anyhow::{Context, Result};
use std::path::Path;

/// One record: a display name (filename at the destination) plus an opaque
/// byte payload. Created once by a producer, consumed exactly once by the
/// uploader, then handed to exactly one outgoing sink. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    payload: Vec<u8>,
}

impl Record {
    /// Builds a record. The name must be non-empty; the payload may be.
    pub fn new(name: impl Into<String>, payload: Vec<u8>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            anyhow::bail!("record name must be non-empty");
        }
        Ok(Self { name, payload })
    }

    /// Reads a file into a record: name = file name, payload = file bytes.
    pub fn from_file(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("no usable file name in {}", path.display()))?
            .to_string();
        let payload =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        Self::new(name, payload)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
