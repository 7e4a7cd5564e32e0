pub mod config;
pub mod dates;
pub mod run;

use std::path::PathBuf;

use goaltracker_core::{Config, DateStore};

/// Paths given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub dates: Option<PathBuf>,
    pub sound: Option<PathBuf>,
}

impl Overrides {
    pub fn config_path(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::default_path()?),
        }
    }

    /// Load the config file and apply `--dates` / `--sound` on top.
    pub fn load_config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = Config::load_from(&self.config_path()?)?;
        if let Some(dates) = &self.dates {
            config.dates_file = dates.display().to_string();
        }
        if let Some(sound) = &self.sound {
            config.notifications.sound = sound.display().to_string();
        }
        Ok(config)
    }

    pub fn open_store(&self, config: &Config) -> Result<DateStore, Box<dyn std::error::Error>> {
        Ok(DateStore::open(&config.dates_file)?)
    }
}
