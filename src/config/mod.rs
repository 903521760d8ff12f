use crate::errors::AppResult;
use crate::utils::path::resolve_against;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// One CSV roster file and its column layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSource {
    pub path: String,
    pub id_column: usize,
    pub name_column: usize,
    #[serde(default = "default_skip_lines")]
    pub skip_lines: usize,
    /// The id column holds an e-mail address whose local part is the id.
    #[serde(default)]
    pub email_id: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_roster_dir")]
    pub roster_dir: String,
    #[serde(default = "default_id_label")]
    pub id_label: String,
    #[serde(default = "default_rosters")]
    pub rosters: Vec<RosterSource>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_skip_lines() -> usize {
    3
}
fn default_roster_dir() -> String {
    ".".to_string()
}
fn default_id_label() -> String {
    "SLU ID".to_string()
}
fn default_rosters() -> Vec<RosterSource> {
    vec![
        RosterSource {
            path: "res/OfficersList.csv".to_string(),
            id_column: 3,
            name_column: 0,
            skip_lines: 3,
            email_id: true,
        },
        RosterSource {
            path: "res/MembersList.csv".to_string(),
            id_column: 2,
            name_column: 1,
            skip_lines: 3,
            email_id: false,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            roster_dir: default_roster_dir(),
            id_label: default_id_label(),
            rosters: default_rosters(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rollcall")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rollcall")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    /// Return the full path of the SQLite store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rollcall.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve a roster path: `~` expansion, then relative to `roster_dir`.
    pub fn resolve_roster_path(&self, source: &RosterSource) -> PathBuf {
        resolve_against(&self.roster_dir, &source.path)
    }

    /// Initialize configuration and store files.
    ///
    /// The YAML is written to `config_path`, which is the file named by
    /// `--config-file` or the default location.
    pub fn init_all(
        config_path: &Path,
        custom_name: Option<String>,
        is_test: bool,
    ) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("rollcall.sqlite")
        };

        let config = Self::with_database(db_path.clone());

        // Write config file
        if !is_test {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(config_path)?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", config_path);
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
