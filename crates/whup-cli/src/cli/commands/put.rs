//! `whup put <files...>` – upload files as records.

use anyhow::Result;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use whup_core::config::UploaderConfig;
use whup_core::record::Record;
use whup_core::route::{CollectedRecords, Routes};
use whup_core::uploader::Uploader;

/// Uploads every file as one record, with up to `jobs` worker threads
/// sharing a single uploader. Errors if any record was routed to failure.
pub fn run_put(cfg: UploaderConfig, files: Vec<PathBuf>, jobs: usize) -> Result<()> {
    let success = Arc::new(CollectedRecords::new());
    let failure = Arc::new(CollectedRecords::new());
    let uploader = Arc::new(Uploader::new(
        cfg,
        Routes::new(success.clone(), failure.clone()),
    )?);

    let total = files.len();
    let workers = jobs.max(1).min(total.max(1));
    tracing::info!("uploading {} file(s) with {} worker(s)", total, workers);

    let queue: Arc<Mutex<VecDeque<PathBuf>>> = Arc::new(Mutex::new(files.into()));
    let mut handles = Vec::new();
    for _ in 0..workers {
        let queue = Arc::clone(&queue);
        let uploader = Arc::clone(&uploader);
        handles.push(std::thread::spawn(move || -> Result<()> {
            loop {
                let path = match queue.lock().unwrap().pop_front() {
                    Some(p) => p,
                    None => return Ok(()),
                };
                let record = Record::from_file(&path)?;
                uploader.upload(record);
            }
        }));
    }
    for handle in handles {
        match handle.join() {
            Ok(res) => res?,
            Err(_) => anyhow::bail!("upload worker panicked"),
        }
    }

    for name in success.names() {
        println!("uploaded: {name}");
    }
    let failed = failure.names();
    for name in &failed {
        println!("failed:   {name}");
    }
    println!("{} of {} uploaded", success.len(), total);

    if !failed.is_empty() {
        anyhow::bail!("{} of {} uploads failed", failed.len(), total);
    }
    Ok(())
}
