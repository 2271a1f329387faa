//! Config command implementation.

use anyhow::{Result, bail};
use cropsense_cli::config::Config;

use crate::cli::ConfigAction;

pub fn cmd_config(action: ConfigAction, quiet: bool) -> Result<()> {
    let path = Config::path();
    match action {
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            let config = Config::load();
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            if !quiet {
                eprintln!("Wrote {}", path.display());
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load();
            config.set(&key, &value)?;
            config.save_to(&path)?;
            if !quiet {
                eprintln!("Set {} = {}", key, value);
            }
        }
        ConfigAction::Unset { key } => {
            let mut config = Config::load();
            config.unset(&key)?;
            config.save_to(&path)?;
            if !quiet {
                eprintln!("Reset {}", key);
            }
        }
    }
    Ok(())
}
