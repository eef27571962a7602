use std::path::Path;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::load_error::LoadError;
use crate::config::save_error::SaveError;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct MenuConfig {
    /// Typing this instead of an index cancels the menu.
    pub exit_marker: String,
    pub exit_label: String,
    pub invalid_option_notice: String,
    pub clear_before_render: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            exit_marker: "x".to_string(),
            exit_label: "Exit".to_string(),
            invalid_option_notice: "Not a valid option, pick an option from the list".to_string(),
            clear_before_render: true,
        }
    }
}

pub type ConfigRef = Arc<MenuConfig>;

impl MenuConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let b = std::fs::read(path)?;
        let s = std::str::from_utf8(&b)?;
        let item: MenuConfig = ron::from_str(s)?;
        Ok(item)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SaveError> {
        let item_s = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())?;
        std::fs::write(path, item_s)?;
        Ok(())
    }

    /*
    A missing file is not an error, it's a first run - defaults get written there.
    A file that fails to load is left untouched and defaults are used for this session.
     */
    pub fn load_or_create_default(path: &Path) -> Self {
        if path.exists() {
            match Self::load_from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed loading config from {:?}: {}, using defaults", path, e);
                    Self::default()
                }
            }
        } else {
            let config = Self::default();
            if let Some(parent) = path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!("failed creating config dir {:?}: {}", parent, e);
                }
            }
            if let Err(e) = config.save_to_file(path) {
                warn!("failed writing default config to {:?}: {}", path, e);
            }
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_ser_de() {
        let d = MenuConfig::default();
        let item = ron::ser::to_string_pretty(&d, ron::ser::PrettyConfig::new());
        assert_eq!(item.as_ref().err(), None);
        let read = ron::from_str::<MenuConfig>(item.as_ref().unwrap());
        assert_eq!(read.as_ref().err(), None);
        assert_eq!(read.unwrap(), d);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let read = ron::from_str::<MenuConfig>("(exit_marker: \"q\")");
        assert_eq!(read.as_ref().err(), None);

        let config = read.unwrap();
        assert_eq!(config.exit_marker, "q");
        assert_eq!(config.exit_label, "Exit");
        assert_eq!(config.clear_before_render, true);
    }
}
