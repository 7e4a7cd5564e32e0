use clap::Subcommand;
use goaltracker_core::{Config, ConfigError};

use super::Overrides;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "dates_file", "notifications.sound")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location
    Path,
    /// Reset config to defaults
    Reset,
}

pub fn run(overrides: &Overrides, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let path = overrides.config_path()?;

    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_from(&path)?;
            let value = config.get(&key).ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(&path)?;
            config.set(&key, &value)?;
            config.save_to(&path)?;
            println!("ok");
        }
        ConfigAction::List { json } => {
            let config = Config::load_from(&path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for (key, value) in config.entries() {
                    println!("{key} = {value}");
                }
            }
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Reset => {
            Config::default().save_to(&path)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
