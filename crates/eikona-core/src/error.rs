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

//! Defines the hierarchy of error types for the asset load path.

use crate::asset::AssetKey;
use std::{fmt, path::PathBuf, time::Duration};

/// Terminal failure of a single scaled-image load.
///
/// Every launched load ends in either a ready resource or exactly one of
/// these variants; a failing source can never stall the batch barrier.
#[derive(Debug)]
pub enum LoadError {
    /// The source bytes could not be read.
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The source bytes were not a decodable raster image.
    Decode {
        /// The path whose content failed to decode.
        path: PathBuf,
        /// Detailed error message from the decoder.
        details: String,
    },
    /// The scaled surface could not be re-encoded.
    Encode {
        /// Detailed error message from the encoder.
        details: String,
    },
    /// The load did not finish within the configured deadline.
    TimedOut {
        /// The path that was still loading when the deadline passed.
        path: PathBuf,
        /// The deadline that was exceeded.
        after: Duration,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
            LoadError::Decode { path, details } => {
                write!(f, "Failed to decode '{}': {details}", path.display())
            }
            LoadError::Encode { details } => {
                write!(f, "Failed to encode scaled image: {details}")
            }
            LoadError::TimedOut { path, after } => {
                write!(
                    f,
                    "Loading '{}' did not finish within {after:?}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// An error rejecting a whole batch before any load is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// Two descriptors in the batch share the same key.
    DuplicateKey(AssetKey),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::DuplicateKey(key) => {
                write!(f, "Duplicate asset key '{key}' in batch")
            }
        }
    }
}

impl std::error::Error for BatchError {}
