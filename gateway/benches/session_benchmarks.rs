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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shardrealms_engine::{Game, SaveManager, WorldCatalog};
use shardrealms_gateway::SessionRegistry;
use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use uuid::Uuid;

fn seed_content(root: &Path) {
    std::fs::write(
        root.join("worlds.json"),
        r#"{
            "demo": {
                "name": "Demo",
                "description": "A small proving ground.",
                "starting_room": "level_one/hall"
            }
        }"#,
    )
    .unwrap();
    let rooms = root.join("demo/level_one/rooms");
    std::fs::create_dir_all(&rooms).unwrap();
    std::fs::write(
        rooms.join("hall.json"),
        r#"{
            "name": "Hall",
            "description": "A quiet hall.",
            "exits": {}
        }"#,
    )
    .unwrap();
}

struct Fixture {
    _dir: TempDir,
    catalog: Arc<WorldCatalog>,
    saves: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        std::fs::create_dir_all(&content).unwrap();
        seed_content(&content);
        let catalog = Arc::new(WorldCatalog::load(&content).unwrap());
        let saves = dir.path().join("saves");
        Self {
            _dir: dir,
            catalog,
            saves,
        }
    }

    fn new_game(&self) -> Game {
        Game::new(
            Arc::clone(&self.catalog),
            SaveManager::new(self.saves.clone()),
        )
    }

    fn open_session(&self, registry: &SessionRegistry) -> Uuid {
        let mut game = self.new_game();
        game.start(None);
        registry.create(game)
    }
}

/// Benchmark session opening: build a game, run the intro, register it.
fn bench_session_open(c: &mut Criterion) {
    let fixture = Fixture::new();
    let registry = SessionRegistry::new();

    c.bench_function("session_open", |b| {
        b.iter(|| {
            let mut game = fixture.new_game();
            let intro = game.start(black_box(None));
            let session_id = registry.create(game);
            black_box((session_id, intro.events.len()))
        });
    });
}

/// Benchmark registry lookups against a populated registry.
fn bench_registry_access(c: &mut Criterion) {
    let fixture = Fixture::new();
    let registry = SessionRegistry::new();

    for _ in 0..100 {
        fixture.open_session(&registry);
    }
    let session_id = fixture.open_session(&registry);

    let mut group = c.benchmark_group("registry");

    group.bench_function("get", |b| {
        b.iter(|| registry.get(black_box(session_id)));
    });

    group.bench_function("get_missing", |b| {
        b.iter(|| registry.get(black_box(Uuid::new_v4())));
    });

    group.bench_function("count", |b| {
        b.iter(|| registry.count());
    });

    group.finish();
}

/// Benchmark one command turn through the session lock.
fn bench_command_roundtrip(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let fixture = Fixture::new();
    let registry = SessionRegistry::new();
    let session_id = fixture.open_session(&registry);

    c.bench_function("command_roundtrip", |b| {
        b.to_async(&rt).iter(|| async {
            let game = registry.get(session_id).expect("session exists");
            let turn = game.lock().await.process_command(black_box("look"));
            black_box(turn.events.len())
        });
    });
}

/// Benchmark concurrent session creation.
fn bench_concurrent_sessions(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let fixture = Fixture::new();
    let registry = Arc::new(SessionRegistry::new());

    let mut group = c.benchmark_group("concurrent_sessions");

    for count in [10, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.to_async(&rt).iter(|| async {
                let mut handles = Vec::new();

                for _ in 0..count {
                    let registry = Arc::clone(&registry);
                    let catalog = Arc::clone(&fixture.catalog);
                    let saves = fixture.saves.clone();
                    let handle = tokio::spawn(async move {
                        let mut game = Game::new(catalog, SaveManager::new(saves));
                        game.start(None);
                        registry.create(game)
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.await.expect("Task failed");
                }
            });
        });
    }

    group.finish();
}

/// Benchmark a sweep pass over fresh sessions.
fn bench_cleanup_expired(c: &mut Criterion) {
    let fixture = Fixture::new();
    let registry = SessionRegistry::new();

    for _ in 0..100 {
        fixture.open_session(&registry);
    }

    c.bench_function("cleanup_expired", |b| {
        b.iter(|| registry.cleanup_expired(black_box(300)));
    });
}

criterion_group!(
    benches,
    bench_session_open,
    bench_registry_access,
    bench_command_roundtrip,
    bench_concurrent_sessions,
    bench_cleanup_expired,
);

criterion_main!(benches);
