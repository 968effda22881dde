use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::error::EngineError;

pub const DATA_DIR_ENV: &str = "DIAMONDLOG_DIR";
pub const USER_ENV: &str = "DIAMONDLOG_USER";
pub const DEFAULT_USER: &str = "default";
const DEFAULT_DIR_NAME: &str = ".diamondlog";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub user: String,
}

impl Config {
    /// Explicit values win; otherwise `~/.diamondlog` and the default user.
    pub fn resolve(data_dir: Option<PathBuf>, user: Option<String>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };
        let user = user.unwrap_or_else(|| DEFAULT_USER.to_string());
        validate_user(&user)?;
        Ok(Self { data_dir, user })
    }
}

// The user id becomes a directory name.
fn validate_user(user: &str) -> Result<(), EngineError> {
    let valid = !user.is_empty()
        && user
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(format!(
            "user id '{}' may only contain letters, digits, '_' and '-'",
            user
        )))
    }
}
