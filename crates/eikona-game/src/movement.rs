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

//! Keyboard-driven player movement.

use crate::{animation::AnimationPlayer, ANIM_STAND, ANIM_WALK};

/// Pressed state of the four cursor keys for one update tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorKeys {
    /// Up arrow is held.
    pub up: bool,
    /// Down arrow is held.
    pub down: bool,
    /// Left arrow is held.
    pub left: bool,
    /// Right arrow is held.
    pub right: bool,
}

/// Which way the player sprite is mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Sprite drawn mirrored, moving left.
    Left,
    /// Sprite drawn as authored, moving right.
    Right,
}

/// The player entity: a position, a facing, and the animation it drives.
#[derive(Debug)]
pub struct Player {
    /// Horizontal position in pixels.
    pub x: i32,
    /// Vertical position in pixels.
    pub y: i32,
    facing: Facing,
}

impl Player {
    /// Creates a player at the given position, facing right.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            facing: Facing::Right,
        }
    }

    /// Which way the sprite currently faces.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Applies one update tick of cursor-key input.
    ///
    /// Moves one pixel per held axis, flips the facing on horizontal
    /// movement, and selects the walk animation while any key is held and
    /// the stand pose otherwise. Opposite keys cancel and count as
    /// standing still.
    pub fn update(&mut self, keys: CursorKeys, animations: &mut AnimationPlayer) {
        let mut dx = 0;
        let mut dy = 0;
        if keys.up {
            dy -= 1;
        }
        if keys.down {
            dy += 1;
        }
        if keys.left {
            dx -= 1;
        }
        if keys.right {
            dx += 1;
        }

        if dx != 0 || dy != 0 {
            animations.play(ANIM_WALK);
            if dx < 0 {
                self.facing = Facing::Left;
            } else if dx > 0 {
                self.facing = Facing::Right;
            }
        } else {
            animations.play(ANIM_STAND);
        }

        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animations() -> AnimationPlayer {
        let mut player = AnimationPlayer::new();
        player.add(ANIM_STAND, vec![0], 60.0, false);
        player.add(ANIM_WALK, vec![1, 2, 3, 0], 5.0, true);
        player
    }

    #[test]
    fn held_keys_move_one_pixel_per_tick() {
        let mut animations = animations();
        let mut player = Player::new(10, 10);

        player.update(
            CursorKeys {
                right: true,
                down: true,
                ..Default::default()
            },
            &mut animations,
        );

        assert_eq!((player.x, player.y), (11, 11));
        assert_eq!(animations.current_animation(), Some(ANIM_WALK));
    }

    #[test]
    fn no_input_selects_the_stand_pose() {
        let mut animations = animations();
        let mut player = Player::new(0, 0);

        player.update(CursorKeys::default(), &mut animations);

        assert_eq!((player.x, player.y), (0, 0));
        assert_eq!(animations.current_animation(), Some(ANIM_STAND));
    }

    #[test]
    fn opposite_keys_cancel_and_count_as_standing() {
        let mut animations = animations();
        let mut player = Player::new(5, 5);

        player.update(
            CursorKeys {
                left: true,
                right: true,
                ..Default::default()
            },
            &mut animations,
        );

        assert_eq!((player.x, player.y), (5, 5));
        assert_eq!(animations.current_animation(), Some(ANIM_STAND));
    }

    #[test]
    fn horizontal_movement_flips_the_facing() {
        let mut animations = animations();
        let mut player = Player::new(0, 0);
        assert_eq!(player.facing(), Facing::Right);

        player.update(
            CursorKeys {
                left: true,
                ..Default::default()
            },
            &mut animations,
        );
        assert_eq!(player.facing(), Facing::Left);

        // Vertical movement keeps the last facing.
        player.update(
            CursorKeys {
                up: true,
                ..Default::default()
            },
            &mut animations,
        );
        assert_eq!(player.facing(), Facing::Left);

        player.update(
            CursorKeys {
                right: true,
                ..Default::default()
            },
            &mut animations,
        );
        assert_eq!(player.facing(), Facing::Right);
    }
}
