// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The Eikona prototype binary.
//!
//! Boots the asset pipeline (load, scale, re-encode, barrier), then drives
//! the game layer headlessly: menu, play, and a short scripted stroll of
//! the player sprite.

mod config;

use anyhow::{bail, Context, Result};
use config::GameConfig;
use eikona_agents::load_agent::{BatchEvent, BatchLoadAgent};
use eikona_core::math::Extent2D;
use eikona_game::{
    animation::AnimationPlayer,
    movement::{CursorKeys, Player},
    scene::SceneMachine,
    sprite::SpriteSheet,
    ANIM_STAND, ANIM_WALK,
};
use std::{path::Path, thread, time::Duration};

const CONFIG_PATH: &str = "eikona.ron";

/// Nominal frame time of the headless update loop.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load_or_default(Path::new(CONFIG_PATH))?;
    log::info!(
        "booting {}x{} window, background {}",
        config.window.width,
        config.window.height,
        config.background
    );

    let (events, progress) = flume::unbounded();
    let reporter = thread::spawn(move || {
        for event in progress.iter() {
            match event {
                BatchEvent::ItemFinished {
                    key,
                    ready,
                    remaining,
                } => {
                    let state = if ready { "ready" } else { "failed" };
                    log::info!("asset '{key}' {state}, {remaining} outstanding");
                }
                BatchEvent::BatchFinished { ready, failed } => {
                    log::info!("batch finished: {ready} ready, {failed} failed");
                }
            }
        }
    });

    let agent =
        BatchLoadAgent::new(config.scale_factor(), config.load_timeout()).with_events(events);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build the async runtime")?;
    let result = runtime.block_on(agent.load_batch(&config.assets))?;

    // Dropping the agent releases the event sender so the reporter exits.
    drop(agent);
    let _ = reporter.join();

    for (key, err) in result.failures() {
        log::error!("asset '{key}': {err}");
    }
    if !result.is_complete() {
        bail!(
            "{} of {} assets failed to load",
            result.failures().count(),
            result.outcomes.len()
        );
    }

    let required = config.assets.iter().map(|d| d.key.clone()).collect();
    let mut scenes = SceneMachine::new(required);
    scenes.assets_ready(result.assets)?;

    scenes.start_play()?;
    run_play_session(&config, &scenes)
}

/// Steps a short scripted play session against the loaded assets.
fn run_play_session(config: &GameConfig, scenes: &SceneMachine) -> Result<()> {
    let resource = scenes
        .assets()
        .get(&config.player.asset)
        .cloned()
        .with_context(|| format!("player asset '{}' is not in the map", config.player.asset))?;

    let frame = config.player.cell * config.scale;
    let sheet = SpriteSheet::new(resource, Extent2D::new(frame, frame))?;
    log::info!(
        "player sheet: {} frames of {frame}x{frame} from a {}x{} resource",
        sheet.frame_count(),
        sheet.resource().extent.width,
        sheet.resource().extent.height
    );

    let mut animations = AnimationPlayer::new();
    animations.add(ANIM_STAND, vec![0], 60.0, false);
    animations.add(ANIM_WALK, vec![1, 2, 3, 0], 5.0, true);
    animations.play(ANIM_WALK);

    let mut player = Player::new(
        (config.window.width / 2) as i32,
        (config.window.height / 2) as i32,
    );

    // A scripted stroll: a second to the right, a second down-left, rest.
    for tick in 0..180u32 {
        let keys = match tick {
            0..=59 => CursorKeys {
                right: true,
                ..Default::default()
            },
            60..=119 => CursorKeys {
                down: true,
                left: true,
                ..Default::default()
            },
            _ => CursorKeys::default(),
        };
        player.update(keys, &mut animations);
        animations.advance(TICK);
    }

    log::info!(
        "session over: player at ({}, {}), facing {:?}, showing frame {:?}",
        player.x,
        player.y,
        player.facing(),
        animations.current_frame()
    );
    Ok(())
}
