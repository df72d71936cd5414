use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the CSV log file.
    pub logfile: String,
    /// Date format used when rendering entries on screen.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logfile: Self::logfile_path().to_string_lossy().to_string(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Return the default path of the CSV log file
    pub fn logfile_path() -> PathBuf {
        Self::config_dir().join("worklog.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Config::default()
        }
    }

    /// Initialize the config directory and config file. Existing files are
    /// left untouched; in test mode the config file is not written at all.
    pub fn init_all(custom_logfile: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let logfile = if let Some(name) = custom_logfile {
            let p = PathBuf::from(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::logfile_path()
        };

        let config = Config {
            logfile: logfile.to_string_lossy().to_string(),
            date_format: default_date_format(),
        };

        let cfg_file = Self::config_file();
        if !is_test && !cfg_file.exists() {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(&cfg_file)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
