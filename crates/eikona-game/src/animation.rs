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

//! Frame animation playback.

use std::{collections::HashMap, time::Duration};

/// A named sequence of sprite-sheet frame indices.
#[derive(Debug, Clone)]
struct Animation {
    frames: Vec<u32>,
    frame_duration: Duration,
    looping: bool,
}

/// Plays named frame animations against a wall-clock tick.
///
/// Playback follows sprite-framework conventions: requesting the animation
/// that is already playing is a no-op, switching animations restarts from
/// the first frame, and a finished non-looping animation holds its last
/// frame.
#[derive(Debug, Default)]
pub struct AnimationPlayer {
    animations: HashMap<String, Animation>,
    current: Option<String>,
    cursor: usize,
    elapsed: Duration,
}

impl AnimationPlayer {
    /// Creates a player with no animations registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an animation under `name`.
    ///
    /// # Panics
    /// Panics if `frames` is empty or `frames_per_second` is not positive.
    pub fn add(
        &mut self,
        name: &str,
        frames: Vec<u32>,
        frames_per_second: f32,
        looping: bool,
    ) {
        assert!(!frames.is_empty(), "animation '{name}' has no frames");
        assert!(
            frames_per_second > 0.0,
            "animation '{name}' needs a positive frame rate"
        );
        self.animations.insert(
            name.to_string(),
            Animation {
                frames,
                // f64 keeps whole-millisecond rates exact at nanosecond
                // precision (5 fps is exactly 200 ms, not 200 ms + 3 ns).
                frame_duration: Duration::from_secs_f64(1.0 / f64::from(frames_per_second)),
                looping,
            },
        );
    }

    /// Starts (or keeps) playing the named animation.
    ///
    /// Unknown names are logged and ignored, so a missing animation
    /// degrades to a frozen sprite rather than a crash.
    pub fn play(&mut self, name: &str) {
        if self.current.as_deref() == Some(name) {
            return;
        }
        if !self.animations.contains_key(name) {
            log::warn!("unknown animation '{name}'");
            return;
        }
        self.current = Some(name.to_string());
        self.cursor = 0;
        self.elapsed = Duration::ZERO;
    }

    /// Advances playback by `dt` of wall-clock time.
    pub fn advance(&mut self, dt: Duration) {
        let (frame_duration, frame_count, looping) = {
            let Some(animation) = self.current.as_ref().and_then(|n| self.animations.get(n))
            else {
                return;
            };
            (
                animation.frame_duration,
                animation.frames.len(),
                animation.looping,
            )
        };

        self.elapsed += dt;
        while self.elapsed >= frame_duration {
            self.elapsed -= frame_duration;
            if self.cursor + 1 < frame_count {
                self.cursor += 1;
            } else if looping {
                self.cursor = 0;
            } else {
                // Hold the last frame once a one-shot animation finishes.
                self.elapsed = Duration::ZERO;
                break;
            }
        }
    }

    /// The sheet frame index to draw right now.
    pub fn current_frame(&self) -> Option<u32> {
        let animation = self.current.as_ref().and_then(|n| self.animations.get(n))?;
        Some(animation.frames[self.cursor])
    }

    /// Name of the animation currently playing.
    pub fn current_animation(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
