use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::server::error::config::ConfigError;

/// Name of the fixed input file consumed by the transform script.
pub static INPUT_FILE_NAME: &str = "flights.xlsx";
/// Name of the fixed output file the transform script must produce.
pub static OUTPUT_FILE_NAME: &str = "flights_parsed.xlsx";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Directory holding the fixed input/output files exchanged with the
    /// transform script. A single-slot resource, see [`AppState::parse_lock`].
    ///
    /// [`AppState::parse_lock`]: crate::server::model::app::AppState
    pub parsing_dir: PathBuf,
    pub transform_interpreter: String,
    pub transform_script: PathBuf,
    pub transform_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let parsing_dir =
            PathBuf::from(std::env::var("PARSING_DIR").unwrap_or_else(|_| "parsing".to_string()));
        let transform_interpreter =
            std::env::var("TRANSFORM_INTERPRETER").unwrap_or_else(|_| "python3".to_string());
        let transform_script = PathBuf::from(
            std::env::var("TRANSFORM_SCRIPT")
                .unwrap_or_else(|_| "parsing/df_parser.py".to_string()),
        );

        let timeout_secs = std::env::var("TRANSFORM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".to_string());
        let timeout_secs: u64 =
            timeout_secs
                .parse()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: "TRANSFORM_TIMEOUT_SECS".to_string(),
                    reason: format!("expected a number of seconds, got {:?}", timeout_secs),
                })?;

        Ok(Self {
            database_url,
            bind_addr,
            parsing_dir,
            transform_interpreter,
            transform_script,
            transform_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Fixed path the uploaded spreadsheet is stored at for the transform script.
    pub fn input_path(&self) -> PathBuf {
        self.parsing_dir.join(INPUT_FILE_NAME)
    }

    /// Fixed path the transform script writes the reshaped spreadsheet to.
    pub fn output_path(&self) -> PathBuf {
        self.parsing_dir.join(OUTPUT_FILE_NAME)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("parsing_dir", &self.parsing_dir)
            .field("transform_interpreter", &self.transform_interpreter)
            .field("transform_script", &self.transform_script)
            .field("transform_timeout", &self.transform_timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Config pointing at a scratch directory, used by tests.
    #[doc(hidden)]
    pub fn for_parsing_dir(parsing_dir: &Path) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            parsing_dir: parsing_dir.to_path_buf(),
            transform_interpreter: "sh".to_string(),
            transform_script: parsing_dir.join("transform.sh"),
            transform_timeout: Duration::from_secs(300),
        }
    }
}
