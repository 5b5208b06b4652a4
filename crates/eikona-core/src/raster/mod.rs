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

//! CPU-side raster buffers.
//!
//! Every load operation in the pipeline allocates its own [`PixelSurface`]
//! and owns it exclusively for the duration of the operation. There is no
//! shared scratch surface anywhere, which is what makes it safe to run
//! loads in parallel.

mod surface;

pub use surface::*;
