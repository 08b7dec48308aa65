//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the product service location, an optional bearer token, and display
//! preferences.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use log::*;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/product-catalog-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub access_token: Option<String>,
    pub theme_name: String,
    pub message_limit: usize,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_message_limit")]
    pub message_limit: usize,
}

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

fn default_message_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            api_base_url: default_api_base_url(),
            access_token: None,
            theme_name: default_theme_name(),
            message_limit: default_message_limit(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided,
    /// otherwise from the default directory. A missing file is created with
    /// the current values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if !file_path.exists() {
            info!("Creating configuration file at {}...", file_path.display());
            return self.save();
        }

        let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        Config::check_url(&data.api_base_url)?;
        self.api_base_url = data.api_base_url;
        self.access_token = data.access_token.filter(|t| !t.trim().is_empty());
        self.theme_name = data.theme_name;
        self.message_limit = data.message_limit;
        debug!("Loaded configuration from {}", file_path.display());
        Ok(())
    }

    /// Override the product service URL for this run only.
    ///
    pub fn set_api_base_url(&mut self, url: &str) -> Result<(), AppError> {
        Config::check_url(url)?;
        self.api_base_url = url.to_owned();
        Ok(())
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// returning any unrecoverable errors.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            api_base_url: self.api_base_url.clone(),
            access_token: self.access_token.clone(),
            theme_name: self.theme_name.clone(),
            message_limit: self.message_limit,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;
        Config::write_file(file_path, &content)?;
        debug!("Saved configuration to {}", file_path.display());
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn write_file(path: &Path, content: &str) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.exists()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDirectoryFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let save_failed = |source| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            source,
        };
        let mut file = fs::File::create(path).map_err(save_failed)?;
        file.write_all(content.as_bytes()).map_err(save_failed)?;
        file.flush().map_err(save_failed)
    }

    fn check_url(url: &str) -> Result<(), ConfigError> {
        Url::parse(url)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidApiUrl {
                url: url.to_owned(),
                message: e.to_string(),
            })
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
