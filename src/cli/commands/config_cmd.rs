//! config command - Set, get, list, or unset configuration values

use anyhow::Result;

use crate::cli::commands::report;
use crate::cli::Context;
use crate::core::commands::{GetConfig, SetConfig, UnsetConfig};
use crate::core::config;

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let start = ctx.start_dir()?;
    report(SetConfig::new(key, value).and_then(|command| config::set(&start, &command)))
}

/// Print a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let start = ctx.start_dir()?;
    let result = GetConfig::new(key).and_then(|command| config::get(&start, &command));
    match result {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(e) => report(Err(e)),
    }
}

/// List every configuration entry as `key = value` lines.
pub fn list(ctx: &Context) -> Result<()> {
    let start = ctx.start_dir()?;
    match config::list(&start) {
        Ok(entries) => {
            for (key, value) in entries {
                println!("{} = {}", key, value);
            }
            Ok(())
        }
        Err(e) => report(Err(e)),
    }
}

/// Remove a configuration value.
pub fn unset(ctx: &Context, key: &str) -> Result<()> {
    let start = ctx.start_dir()?;
    report(UnsetConfig::new(key).and_then(|command| config::unset(&start, &command)))
}
