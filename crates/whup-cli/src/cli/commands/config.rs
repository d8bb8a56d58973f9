//! `whup config` – show the config file path and effective configuration.

use anyhow::Result;
use whup_core::config;

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init()?;
    println!("config file: {}", path.display());
    print!("{}", toml::to_string_pretty(&cfg)?);
    Ok(())
}
