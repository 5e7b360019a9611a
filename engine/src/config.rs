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
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to configuration file",
        default_value = "engine/config.yaml"
    )]
    pub config_file: String,

    #[arg(
        short = 'e',
        long = "env",
        help = "Path to environment file",
        default_value = "engine/.env"
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
    pub content: ContentConfig,
    pub saves: SaveConfig,
}

impl Configuration {
    pub fn load(path: &str) -> Result<Configuration, String> {
        let conf = serde_yaml::from_reader(
            std::fs::File::open(path).map_err(|e| format!("Failed to open config file: {}", e))?,
        )
        .map_err(|e| format!("Failed to parse config file: {}", e))?;

        Ok(conf)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding `worlds.json` and the world subdirectories.
    pub root: EnvField<ContentRoot>,

    /// World the player spawns into; the first catalog world when unset.
    pub default_world: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Directory save files are written to.
    pub directory: EnvField<SaveDirectory>,

    /// How many quicksave files to keep before pruning the oldest.
    #[serde(default = "default_keep_quicksaves")]
    pub keep_quicksaves: usize,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            directory: Default::default(),
            keep_quicksaves: default_keep_quicksaves(),
        }
    }
}

fn default_keep_quicksaves() -> usize {
    5
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentRoot(String);

impl ContentRoot {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl FromStr for ContentRoot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl Default for ContentRoot {
    fn default() -> Self {
        Self(String::from("content"))
    }
}

impl std::fmt::Display for ContentRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveDirectory(String);

impl SaveDirectory {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl FromStr for SaveDirectory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl Default for SaveDirectory {
    fn default() -> Self {
        Self(String::from("saves"))
    }
}

impl std::fmt::Display for SaveDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
