//! Configuration management module.
//!
//! This module handles loading and saving the YAML configuration file that
//! points the widget at a backend and tunes its timing and limits.

mod error;

pub use error::ConfigError;

use crate::animator::DEFAULT_TICK_IN_MS;
use crate::client::SubmitEndpoint;
use crate::error::AppError;
use crate::gate::DEFAULT_MAX_INPUT_LENGTH;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/task-assistant";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub max_input_length: usize,
    pub typing_tick_ms: u64,
    pub submit_endpoint: SubmitEndpoint,
    pub enforce_input_limit: bool,
    pub request_timeout_secs: u64, // 0 waits forever
    pub task_poll_interval_secs: u64, // 0 disables polling
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,
    #[serde(default = "default_typing_tick_ms")]
    pub typing_tick_ms: u64,
    #[serde(default)]
    pub submit_endpoint: SubmitEndpoint,
    #[serde(default)]
    pub enforce_input_limit: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_task_poll_interval_secs")]
    pub task_poll_interval_secs: u64,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_max_input_length() -> usize {
    DEFAULT_MAX_INPUT_LENGTH
}

fn default_typing_tick_ms() -> u64 {
    DEFAULT_TICK_IN_MS
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_task_poll_interval_secs() -> u64 {
    15
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            max_input_length: default_max_input_length(),
            typing_tick_ms: default_typing_tick_ms(),
            submit_endpoint: SubmitEndpoint::default(),
            enforce_input_limit: false,
            request_timeout_secs: default_request_timeout_secs(),
            task_poll_interval_secs: default_task_poll_interval_secs(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write the current values
    /// to it so there is something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
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

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply(Config::parse(&contents)?);
            debug!("Loaded configuration from {}", file_path.display());
        } else {
            info!(
                "No configuration found, writing defaults to {}",
                file_path.display()
            );
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let content = serde_yaml::to_string(&self.to_spec())
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Per-character delay of the response animation.
    ///
    pub fn typing_tick(&self) -> Duration {
        Duration::from_millis(self.typing_tick_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn task_poll_interval(&self) -> Option<Duration> {
        match self.task_poll_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    fn parse(contents: &str) -> Result<FileSpec, ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        if data.max_input_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_input_length",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(data)
    }

    fn apply(&mut self, data: FileSpec) {
        self.base_url = data.base_url;
        self.max_input_length = data.max_input_length;
        self.typing_tick_ms = data.typing_tick_ms;
        self.submit_endpoint = data.submit_endpoint;
        self.enforce_input_limit = data.enforce_input_limit;
        self.request_timeout_secs = data.request_timeout_secs;
        self.task_poll_interval_secs = data.task_poll_interval_secs;
        self.theme_name = data.theme_name;
    }

    fn to_spec(&self) -> FileSpec {
        FileSpec {
            base_url: self.base_url.clone(),
            max_input_length: self.max_input_length,
            typing_tick_ms: self.typing_tick_ms,
            submit_endpoint: self.submit_endpoint,
            enforce_input_limit: self.enforce_input_limit,
            request_timeout_secs: self.request_timeout_secs,
            task_poll_interval_secs: self.task_poll_interval_secs,
            theme_name: self.theme_name.clone(),
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
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

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
