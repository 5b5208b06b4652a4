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

//! # Eikona Game
//!
//! The gameplay layer of the prototype, kept headless: scene transitions,
//! sprite-sheet slicing, frame animation, and keyboard-driven movement.
//! It consumes the asset map produced by `eikona-agents` and treats every
//! resource as an opaque, directly loadable image.

pub mod animation;
pub mod movement;
pub mod scene;
pub mod sprite;

/// Animation played while the player is moving.
pub const ANIM_WALK: &str = "walk";
/// Animation played while the player stands still.
pub const ANIM_STAND: &str = "stand";
