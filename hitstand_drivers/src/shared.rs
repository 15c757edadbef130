pub mod dto;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ConfigServer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigServer {
    pub host: String,
    pub port: u16,
    /// Number of HTTP workers. 0 lets actix pick one per core.
    pub workers: usize,
}

impl Default for ConfigServer {
    fn default() -> Self {
        ConfigServer {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ConfigServer {
    pub fn get_bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Reads the content of a given config file and parses it to a Config.
/// Keys missing from the file keep their defaults.
pub fn parse_config_from_file(filename: &str) -> anyhow::Result<Config> {
    let file_content = fs::read_to_string(filename)
        .map_err(|e| anyhow::anyhow!("cannot read config file {}: {}", filename, e))?;
    parse_config(&file_content)
}

pub fn parse_config(content: &str) -> anyhow::Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
