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
use shardrealms_engine::config::{Arguments, Configuration};
use shardrealms_engine::content::WorldCatalog;
use shardrealms_engine::game::{Game, Turn};
use shardrealms_engine::persistence::SaveManager;
use shardrealms_engine::render;
use std::io::Write;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
        .init();

    // Load environment variables from .env file if specified
    if let Some(ref env_file) = arguments.env_file {
        if std::path::Path::new(env_file).exists() {
            tracing::debug!("Loading environment variables from file: {}", env_file);
            dotenv::from_filename(env_file).ok();
        }
    } else {
        // Try default .env file
        tracing::debug!("Loading environment variables from default file");
        dotenv::dotenv().ok();
    }

    // Load configuration from a file with environment variable substitution
    let config: Configuration =
        Configuration::load(&arguments.config_file).expect("Unable to load configuration file");

    tracing::debug!("Configuration loaded: {:?}", config);
    tracing::info!("Starting Shardrealms...");

    // Load every world from the content tree
    let catalog = Arc::new(WorldCatalog::load(config.content.root.as_path())?);
    tracing::info!("Loaded {} worlds from {}", catalog.len(), config.content.root);

    let saves = SaveManager::with_retention(
        config.saves.directory.as_path(),
        config.saves.keep_quicksaves,
    );

    let mut game = Game::new(catalog, saves);
    let turn = game.start(config.content.default_world.as_deref());
    print_turn(&turn);
    if turn.ended {
        return Ok(());
    }

    // Read-eval-print loop; EOF on stdin ends the session like `quit`.
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let turn = game.process_command(&line);
        print_turn(&turn);
        if turn.ended {
            break;
        }
    }

    Ok(())
}

fn print_turn(turn: &Turn) {
    for event in &turn.events {
        println!("{}", render::render(event));
    }
}
