use std::env;
use std::str::FromStr;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_ROOM_CODE_LEN: usize = 5;

/// Process-level settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Characters in generated room codes.
    pub room_code_len: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            room_code_len: DEFAULT_ROOM_CODE_LEN,
        }
    }
}

impl ServerConfig {
    /// `BACKEND_HOST`, `BACKEND_PORT`, `ROOM_CODE_LEN`; unset values fall back
    /// to defaults, unparsable ones are a config error.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "BACKEND_PORT", DEFAULT_PORT)?;
        let room_code_len = parse_or(&lookup, "ROOM_CODE_LEN", DEFAULT_ROOM_CODE_LEN)?;
        if !(4..=16).contains(&room_code_len) {
            return Err(AppError::config(format!(
                "ROOM_CODE_LEN must be between 4 and 16, got {room_code_len}"
            )));
        }
        Ok(Self {
            host,
            port,
            room_code_len,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("{key} is invalid ({raw:?}): {e}"))),
    }
}
