//! Config command

use anyhow::Result;
use lessons_core::AppConfig;

pub fn handle(config: &AppConfig) -> Result<()> {
    println!("⚙️  Current Configuration:");
    println!("{}", serde_json::to_string_pretty(config)?);
    println!();
    println!("⏱️  Proxy load delay: {:?}", config.proxy_load_delay());

    Ok(())
}
