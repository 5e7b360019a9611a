//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;
use shardrealms_engine::config::{ContentConfig, SaveConfig};
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to configuration file",
        default_value = "gateway/config.yaml"
    )]
    pub config_file: String,

    #[arg(
        short = 'e',
        long = "env",
        help = "Path to environment file",
        default_value = "gateway/.env"
    )]
    pub env_file: Option<String>,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            config_file: "config.yaml".to_string(),
            env_file: Some(".env".to_string()),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// Game content settings, shared with the engine binary.
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub saves: SaveConfig,

    pub listener: Option<ListenerConfig>,

    pub session: Option<SessionConfig>,
}

impl Configuration {
    pub fn load(path: &str) -> Result<Self, String> {
        tracing::debug!("Loading configuration from file: {}", path);
        let file =
            std::fs::File::open(path).map_err(|e| format!("Failed to open config file: {}", e))?;

        let conf = serde_yaml::from_reader(file)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        Ok(conf)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListenerConfig {
    pub addr: EnvField<ListenerBinding>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListenerBinding(SocketAddr);

impl ListenerBinding {
    pub fn to_addr(&self) -> SocketAddr {
        self.0
    }
    pub fn to_ip(&self) -> IpAddr {
        self.0.ip()
    }
    pub fn to_port(&self) -> u16 {
        self.0.port()
    }
}

impl FromStr for ListenerBinding {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(SocketAddr::from_str(s)?))
    }
}

impl Default for ListenerBinding {
    fn default() -> Self {
        Self(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::new(0, 0, 0, 0),
            8080,
        )))
    }
}

impl std::fmt::Display for ListenerBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle seconds before a session is swept (default: 1800)
    #[serde(default = "default_session_timeout")]
    pub timeout: i64,

    /// Seconds between sweep passes (default: 60)
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval: u64,
}

fn default_session_timeout() -> i64 {
    1800
}

fn default_sweep_interval() -> u64 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            timeout: default_session_timeout(),
            sweep_interval: default_sweep_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_arguments_default() {
        let arguments = Arguments::default();
        assert_eq!(arguments.config_file, "config.yaml");
        assert_eq!(arguments.env_file, Some(".env".to_string()));
    }

    #[test]
    fn test_listener_config_default() {
        let config = ListenerConfig::default();
        assert_eq!(
            config.addr.to_addr(),
            SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(0, 0, 0, 0), 8080))
        );
        assert_eq!(config.addr.to_ip(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(config.addr.to_port(), 8080);
    }

    #[test]
    fn test_session_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.timeout, 1800);
        assert_eq!(config.sweep_interval, 60);
    }

    #[test]
    fn test_configuration_new_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            r#"
content:
  root: assets/worlds
  default_world: elemental_conflux
saves:
  directory: run/saves
listener:
  addr: 127.0.0.1:8081
session:
  timeout: 600
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        unsafe {
            std::env::remove_var("SHARDREALMS_LISTENER_ADDR");
        }

        let config = Configuration::load(path).unwrap();

        assert_eq!(config.content.root.as_str(), "assets/worlds");
        assert_eq!(
            config.content.default_world.as_deref(),
            Some("elemental_conflux")
        );
        assert_eq!(config.saves.directory.as_str(), "run/saves");
        assert_eq!(config.listener.unwrap().addr.to_port(), 8081);
        let session = config.session.unwrap();
        assert_eq!(session.timeout, 600);
        assert_eq!(session.sweep_interval, 60);
    }

    #[test]
    fn test_configuration_missing_sections_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            r#"
content:
  root: content
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let config = Configuration::load(path).unwrap();

        assert_eq!(config.saves.directory.as_str(), "saves");
        assert_eq!(config.saves.keep_quicksaves, 5);
        assert!(config.listener.is_none());
        assert!(config.session.is_none());
    }

    #[test]
    fn test_configuration_env_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            r#"
listener:
  addr: "${{SHARDREALMS_LISTENER_ADDR:-0.0.0.0:8080}}"
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();

        unsafe {
            std::env::set_var("SHARDREALMS_LISTENER_ADDR", "127.0.0.1:9000");
        }

        let config = Configuration::load(path).unwrap();

        unsafe {
            std::env::remove_var("SHARDREALMS_LISTENER_ADDR");
        }

        let addr = config.listener.unwrap().addr.to_addr();
        assert_eq!(
            addr,
            SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 9000)
        );
    }
}
