use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use feed_core::{update, AppState, Msg};
use feed_engine::{EngineConfig, SearchSettings, UpdateSettings};
use feed_logging::feed_info;

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);

    let config_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = config::load(&config_dir);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), engine_config(&config));
    let mut state = AppState::with_cells_per_row(config.cells_per_row)?;

    // Background tick to advance fades and coalesce rendering.
    {
        let msg_tx = msg_tx.clone();
        thread::spawn(move || {
            let elapsed_ms = TICK_INTERVAL.as_millis() as u64;
            while msg_tx.send(Msg::Tick { elapsed_ms }).is_ok() {
                thread::sleep(TICK_INTERVAL);
            }
        });
    }

    // The viewport is read exactly once; the fetch follows from it.
    let _ = msg_tx.send(Msg::ViewportMeasured {
        width: config.viewport_width,
    });
    runner.check_for_update();

    while let Ok(msg) = msg_rx.recv() {
        let feed_arrived = matches!(msg, Msg::FeedLoaded { .. });
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);

        if feed_arrived && !state.view().searching {
            feed_info!("Feed published at {}", Utc::now().to_rfc3339());
        }
        if state.consume_dirty() {
            for line in ui::render::render(&state.view()) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn engine_config(config: &AppConfig) -> EngineConfig {
    EngineConfig {
        search: SearchSettings {
            text: config.search_text.clone(),
            api_key: config.api_key.clone(),
            ..SearchSettings::default()
        },
        update: config
            .manifest_url
            .as_ref()
            .map(|url| UpdateSettings::new(url.clone(), config.installed_label.clone())),
    }
}
