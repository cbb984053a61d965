use std::{
    fs,
    path::{Path, PathBuf},
};

use dungeon_editor_engine::ViewMode;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "dungeon_editor";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Indent the submission payload
    pub pretty_payload: bool,
    /// Draw neighbouring level borders around `--render` output
    pub render_edges: bool,
    pub default_view_mode: ViewMode,
    /// flexi_logger spec, `--log-spec` wins over it
    pub log_spec: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pretty_payload: true,
            render_edges: true,
            default_view_mode: ViewMode::UpToCurrent,
            log_spec: "info".to_string(),
        }
    }
}

impl Options {
    /// Reads `options.toml` from the config directory, or from `path` when given.
    /// Unreadable files fall back to the defaults.
    pub fn load_options(path: Option<&Path>) -> Self {
        let options_file = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let Some(dir) = Self::get_config_dir() else {
                    return Self::default();
                };
                if !dir.exists() && fs::create_dir_all(&dir).is_err() {
                    log::error!("Can't create configuration directory {}", dir.display());
                    return Self::default();
                }
                dir.join("options.toml")
            }
        };

        if !options_file.exists() {
            let options = Self::default();
            if path.is_none() {
                options.store_options();
            }
            return options;
        }
        match fs::read_to_string(&options_file) {
            Ok(txt) => match toml::from_str(&txt) {
                Ok(result) => return result,
                Err(err) => log::error!("Error parsing options file {}: {}", options_file.display(), err),
            },
            Err(err) => log::error!("Error reading options file: {}", err),
        }
        Self::default()
    }

    pub fn store_options(&self) {
        if let Some(dir) = Self::get_config_dir() {
            let file_name = dir.join("options.toml");
            match toml::to_string(self) {
                Ok(text) => {
                    if let Err(err) = fs::write(file_name, text) {
                        log::error!("Error writing options file: {}", err);
                    }
                }
                Err(err) => log::error!("Error writing options file: {}", err),
            }
        }
    }

    /// Returns the configuration directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", APP_NAME).map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }
}
