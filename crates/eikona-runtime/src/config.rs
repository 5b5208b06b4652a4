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

//! The RON manifest that configures a run of the prototype.

use anyhow::{ensure, Context, Result};
use eikona_core::asset::{AssetDescriptor, AssetKey};
use serde::{Deserialize, Serialize};
use std::{num::NonZeroU32, path::Path, time::Duration};

/// Logical window dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
        }
    }
}

/// Which asset the player sprite comes from and how it is gridded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Key of the sprite-sheet asset.
    pub asset: AssetKey,
    /// Side length of one sprite cell, in source pixels (before scaling).
    pub cell: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            asset: AssetKey::from("kid"),
            cell: 16,
        }
    }
}

/// Everything a run of the prototype needs, as read from `eikona.ron`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical window size.
    pub window: WindowConfig,
    /// Menu background color, as a `#rrggbb` hex string.
    pub background: String,
    /// Integer magnification factor applied to every asset.
    pub scale: u32,
    /// Per-asset load deadline, in seconds.
    pub load_timeout_secs: u64,
    /// The asset batch to load before the menu appears.
    pub assets: Vec<AssetDescriptor>,
    /// Player sprite configuration.
    pub player: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            background: "#42244d".to_string(),
            scale: 4,
            load_timeout_secs: 30,
            assets: vec![AssetDescriptor::new("kid", "assets/kid.png")],
            player: PlayerConfig::default(),
        }
    }
}

impl GameConfig {
    /// Reads and validates the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest '{}'", path.display()))?;
        let config: Self = ron::from_str(&text)
            .with_context(|| format!("Failed to parse manifest '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but falls back to the defaults when no
    /// manifest exists.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!(
                "no manifest at '{}', using built-in defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.scale >= 1, "scale factor must be at least 1");
        ensure!(
            self.load_timeout_secs >= 1,
            "load timeout must be at least one second"
        );
        ensure!(self.player.cell >= 1, "player cell size must be at least 1");
        Ok(())
    }

    /// The scale factor as the pipeline wants it.
    pub fn scale_factor(&self) -> NonZeroU32 {
        NonZeroU32::new(self.scale).expect("validated at load time")
    }

    /// The per-asset load deadline.
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }
}
