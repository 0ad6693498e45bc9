use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub reference: ReferenceConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Location of the province/municipality/barangay listing used by the form
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReferenceConfig {
    pub address_file: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExportConfig {
    pub filename: String,
}

pub const DEFAULT_EXPORT_FILENAME: &str = "4ps_assessments_report.csv";

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            database: DatabaseConfig {
                path: get_default_db_path(),
            },
            reference: ReferenceConfig {
                address_file: PathBuf::from("address.csv"),
            },
            export: ExportConfig {
                filename: DEFAULT_EXPORT_FILENAME.to_string(),
            },
        }
    }
}

impl ApiConfig {
    /// Loads the configuration file, writing a default one first if it does not exist.
    /// Values can be overridden with `ASSESSMENT__<SECTION>__<KEY>` environment variables.
    pub fn load(explicit_path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = explicit_path
            .map(Path::to_path_buf)
            .unwrap_or_else(get_config_path);

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
            }
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            std::fs::write(&config_path, default_config_contents()).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .add_source(
                Environment::with_prefix("ASSESSMENT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;

        config.database.path = expand_tilde(&config.database.path);
        config.reference.address_file = expand_tilde(&config.reference.address_file);

        Ok((config, config_path))
    }
}

fn default_config_contents() -> String {
    let defaults = ApiConfig::default();
    format!(
        r#"
[server]
host = "{host}"
port = {port}

[database]
path = '{db}'

[reference]
# CSV with "Province Name", "City/Municipality Name" and "Barangay Name" columns
address_file = '{address}'

[export]
filename = "{filename}"
"#,
        host = defaults.server.host,
        port = defaults.server.port,
        db = defaults.database.path.display(),
        address = defaults.reference.address_file.display(),
        filename = defaults.export.filename,
    )
}

fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("assessment/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

fn get_default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("assessment/app.db")
    } else {
        PathBuf::from("app.db")
    }
}
