//! Global tunecal configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, File};
use serde::{Deserialize, Serialize};
use tunecal_core::Branch;

static DEFAULT_BOOKINGS_PATH: &str = "~/tunecal/bookings.json";

fn default_bookings_path() -> PathBuf {
    PathBuf::from(DEFAULT_BOOKINGS_PATH)
}

fn is_default_bookings_path(p: &PathBuf) -> bool {
    *p == default_bookings_path()
}

/// Global configuration at ~/.config/tunecal/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct TunecalConfig {
    #[serde(
        default = "default_bookings_path",
        skip_serializing_if = "is_default_bookings_path"
    )]
    pub bookings_file: PathBuf,

    /// Branch assigned to new bookings when none is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<Branch>,
}

impl TunecalConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: TunecalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .context("Could not read config file")?
            .try_deserialize()
            .context("Could not parse config file")?;

        Ok(config)
    }

    /// Bookings file path with `~` expanded.
    pub fn bookings_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.bookings_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("tunecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &std::path::Path) -> Result<()> {
        let contents = format!(
            "\
# tunecal configuration

# Where your bookings live:
# bookings_file = \"{}\"

# Branch for new bookings when --branch is not given:
# default_branch = \"msk\"
",
            DEFAULT_BOOKINGS_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }
}
