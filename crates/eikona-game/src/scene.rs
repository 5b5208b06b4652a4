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

//! Scene transitions of the prototype.
//!
//! The machine refuses to leave [`Scene::Boot`] until every required asset
//! is present in the map, so gameplay can never start against a partially
//! loaded world.

use eikona_core::asset::{AssetKey, AssetMap};
use std::fmt;

/// The scenes the prototype moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Loading phase; assets are not ready yet.
    Boot,
    /// Title menu with the play button.
    Menu,
    /// Active gameplay.
    Play,
}

/// An illegal request made of the scene machine.
#[derive(Debug)]
pub enum SceneError {
    /// The requested transition is not part of the scene graph.
    InvalidTransition {
        /// The scene the machine was in.
        from: Scene,
        /// The scene that was requested.
        to: Scene,
    },
    /// Required assets are missing from the supplied map.
    AssetsNotReady {
        /// The keys that are required but absent.
        missing: Vec<AssetKey>,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidTransition { from, to } => {
                write!(f, "Cannot transition from {from:?} to {to:?}")
            }
            SceneError::AssetsNotReady { missing } => {
                write!(f, "Assets not ready, missing: ")?;
                for (i, key) in missing.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{key}'")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Drives the Boot → Menu → Play scene graph.
pub struct SceneMachine {
    scene: Scene,
    required: Vec<AssetKey>,
    assets: AssetMap,
}

impl SceneMachine {
    /// Creates a machine in [`Scene::Boot`] that requires the given keys
    /// before the menu can be shown.
    pub fn new(required: Vec<AssetKey>) -> Self {
        Self {
            scene: Scene::Boot,
            required,
            assets: AssetMap::new(),
        }
    }

    /// The scene the machine is currently in.
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// The asset map handed over at boot. Empty until then.
    pub fn assets(&self) -> &AssetMap {
        &self.assets
    }

    /// Hands the loaded asset map to the machine and enters the menu.
    ///
    /// Fails if the machine already left boot, or if any required key is
    /// missing from the map.
    pub fn assets_ready(&mut self, assets: AssetMap) -> Result<(), SceneError> {
        if self.scene != Scene::Boot {
            return Err(SceneError::InvalidTransition {
                from: self.scene,
                to: Scene::Menu,
            });
        }

        let missing: Vec<AssetKey> = self
            .required
            .iter()
            .filter(|key| !assets.contains_key(key))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(SceneError::AssetsNotReady { missing });
        }

        self.assets = assets;
        self.scene = Scene::Menu;
        log::info!("assets ready, entering menu");
        Ok(())
    }

    /// The play button: leaves the menu and starts gameplay.
    pub fn start_play(&mut self) -> Result<(), SceneError> {
        if self.scene != Scene::Menu {
            return Err(SceneError::InvalidTransition {
                from: self.scene,
                to: Scene::Play,
            });
        }
        self.scene = Scene::Play;
        log::info!("entering play");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eikona_core::{
        asset::{AssetHandle, ScaledResource},
        math::Extent2D,
    };

    fn map_with(keys: &[&str]) -> AssetMap {
        keys.iter()
            .map(|&key| {
                (
                    AssetKey::from(key),
                    AssetHandle::new(ScaledResource {
                        uri: format!("data:image/png;base64,{key}"),
                        extent: Extent2D::new(64, 64),
                    }),
                )
            })
            .collect()
    }

    #[test]
    fn boot_to_menu_requires_all_keys() {
        let mut machine = SceneMachine::new(vec![AssetKey::from("kid")]);

        let err = machine.assets_ready(AssetMap::new()).unwrap_err();
        match err {
            SceneError::AssetsNotReady { missing } => {
                assert_eq!(missing, vec![AssetKey::from("kid")]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(machine.scene(), Scene::Boot);

        machine.assets_ready(map_with(&["kid"])).unwrap();
        assert_eq!(machine.scene(), Scene::Menu);
    }

    #[test]
    fn play_is_only_reachable_from_menu() {
        let mut machine = SceneMachine::new(Vec::new());

        assert!(matches!(
            machine.start_play(),
            Err(SceneError::InvalidTransition { from: Scene::Boot, to: Scene::Play })
        ));

        machine.assets_ready(AssetMap::new()).unwrap();
        machine.start_play().unwrap();
        assert_eq!(machine.scene(), Scene::Play);

        // Re-entering play from play is not part of the scene graph.
        assert!(machine.start_play().is_err());
    }

    #[test]
    fn boot_handover_happens_at_most_once() {
        let mut machine = SceneMachine::new(Vec::new());
        machine.assets_ready(map_with(&["kid"])).unwrap();

        assert!(machine.assets_ready(map_with(&["kid"])).is_err());
        assert!(machine.assets().contains_key(&AssetKey::from("kid")));
    }
}
