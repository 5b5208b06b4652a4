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

//! # Eikona Lanes
//!
//! The data plane of the asset pipeline: CPU-bound "lanes" that decode
//! raster bytes into pixel surfaces, magnify them with strict
//! nearest-neighbor replication, and re-encode the result as a
//! self-contained data URI. Lanes are pure transformations; scheduling and
//! completion tracking live in `eikona-agents`.

pub mod image_lane;
