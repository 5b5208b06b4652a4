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

use super::{AssetFetcher, ScaledImageLoader};
use eikona_core::{
    asset::{AssetDescriptor, AssetHandle, AssetKey, AssetMap, ScaledResource},
    BatchError, LoadError,
};
use std::{collections::HashSet, num::NonZeroU32, sync::Arc, time::Duration};
use tokio::task::JoinSet;

/// Terminal state of one batch member.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The scaled resource is ready for the renderer.
    Ready(AssetHandle<ScaledResource>),
    /// The load failed; the error says how.
    Failed(LoadError),
}

impl LoadOutcome {
    /// Whether this member produced a usable resource.
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadOutcome::Ready(_))
    }
}

/// Everything a finished batch produced.
///
/// `assets` holds the ready resources by key; `outcomes` records the
/// terminal state of every member, successes and failures alike, in
/// completion order.
#[derive(Debug, Default)]
pub struct BatchResult {
    expected: usize,
    /// Ready resources, by asset key.
    pub assets: AssetMap,
    /// Per-member terminal states, in the order the members finished.
    pub outcomes: Vec<(AssetKey, LoadOutcome)>,
}

impl BatchResult {
    fn for_batch(expected: usize) -> Self {
        Self {
            expected,
            ..Self::default()
        }
    }

    /// Whether every member of the batch produced a ready resource.
    pub fn is_complete(&self) -> bool {
        self.outcomes.len() == self.expected
            && self.outcomes.iter().all(|(_, outcome)| outcome.is_ready())
    }

    /// Iterates over the members that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&AssetKey, &LoadError)> {
        self.outcomes.iter().filter_map(|(key, outcome)| match outcome {
            LoadOutcome::Failed(err) => Some((key, err)),
            LoadOutcome::Ready(_) => None,
        })
    }
}

/// Progress notifications emitted while a batch is loading.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// One member reached its terminal state.
    ItemFinished {
        /// The member's asset key.
        key: AssetKey,
        /// Whether the member produced a usable resource.
        ready: bool,
        /// How many members are still outstanding.
        remaining: usize,
    },
    /// The whole batch resolved.
    BatchFinished {
        /// Number of members that produced a resource.
        ready: usize,
        /// Number of members that failed.
        failed: usize,
    },
}

/// Runs a batch of scaled-image loads concurrently and resolves exactly
/// once, after every member has reached a terminal outcome.
///
/// The barrier is a [`JoinSet`] drain rather than a shared counter: the
/// single resolution point is the return of [`load_batch`], and a member
/// that stalls is converted into a timeout failure instead of wedging the
/// batch forever.
///
/// [`load_batch`]: BatchLoadAgent::load_batch
pub struct BatchLoadAgent {
    loader: ScaledImageLoader,
    deadline: Duration,
    events: Option<flume::Sender<BatchEvent>>,
}

impl BatchLoadAgent {
    /// Creates an agent loading from the filesystem at the given scale,
    /// with a per-member deadline.
    pub fn new(scale: NonZeroU32, deadline: Duration) -> Self {
        Self {
            loader: ScaledImageLoader::new(scale),
            deadline,
            events: None,
        }
    }

    /// Replaces the byte source of the underlying loader.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn AssetFetcher>) -> Self {
        self.loader = self.loader.with_fetcher(fetcher);
        self
    }

    /// Attaches a channel for progress events. Send failures are ignored;
    /// a dropped receiver only mutes progress reporting.
    pub fn with_events(mut self, sender: flume::Sender<BatchEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Loads every descriptor concurrently and returns once all of them
    /// have finished, one way or the other.
    ///
    /// Duplicate keys are rejected before any work starts. An empty batch
    /// resolves immediately with an empty, complete result. Completion
    /// order among members is arbitrary and carries no guarantees.
    pub async fn load_batch(
        &self,
        descriptors: &[AssetDescriptor],
    ) -> Result<BatchResult, BatchError> {
        let mut seen = HashSet::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if !seen.insert(&descriptor.key) {
                return Err(BatchError::DuplicateKey(descriptor.key.clone()));
            }
        }

        let total = descriptors.len();
        if total == 0 {
            log::debug!("empty batch, nothing to load");
            self.emit(BatchEvent::BatchFinished { ready: 0, failed: 0 });
            return Ok(BatchResult::default());
        }

        log::info!(
            "loading batch of {total} assets at scale {}",
            self.loader.scale()
        );

        let mut tasks = JoinSet::new();
        for descriptor in descriptors {
            let loader = self.loader.clone();
            let key = descriptor.key.clone();
            let path = descriptor.source.clone();
            let deadline = self.deadline;
            tasks.spawn(async move {
                let outcome =
                    match tokio::time::timeout(deadline, loader.load_scaled(&path)).await {
                        Ok(Ok(resource)) => LoadOutcome::Ready(AssetHandle::new(resource)),
                        Ok(Err(err)) => LoadOutcome::Failed(err),
                        Err(_) => LoadOutcome::Failed(LoadError::TimedOut {
                            path,
                            after: deadline,
                        }),
                    };
                (key, outcome)
            });
        }

        let mut result = BatchResult::for_batch(total);
        while let Some(joined) = tasks.join_next().await {
            let (key, outcome) = match joined {
                Ok(member) => member,
                Err(err) => {
                    // A panicked member leaves a hole in the outcome list;
                    // is_complete() compares against the expected count, so
                    // the hole surfaces as an incomplete batch.
                    log::error!("batch member task failed to join: {err}");
                    continue;
                }
            };

            match &outcome {
                LoadOutcome::Ready(handle) => {
                    result.assets.insert(key.clone(), handle.clone());
                }
                LoadOutcome::Failed(err) => {
                    log::warn!("asset '{key}' failed to load: {err}");
                }
            }
            self.emit(BatchEvent::ItemFinished {
                key: key.clone(),
                ready: outcome.is_ready(),
                remaining: total - result.outcomes.len() - 1,
            });
            result.outcomes.push((key, outcome));
        }

        let ready = result.assets.len();
        let failed = result.outcomes.len() - ready;
        log::info!("batch finished: {ready} ready, {failed} failed");
        self.emit(BatchEvent::BatchFinished { ready, failed });

        Ok(result)
    }

    fn emit(&self, event: BatchEvent) {
        if let Some(sender) = &self.events {
            if sender.send(event).is_err() {
                log::trace!("batch event receiver disconnected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_counts_as_complete() {
        assert!(BatchResult::default().is_complete());
    }

    #[test]
    fn a_single_failure_makes_the_result_incomplete() {
        let mut result = BatchResult::for_batch(1);
        result.outcomes.push((
            AssetKey::from("kid"),
            LoadOutcome::Failed(LoadError::Encode {
                details: "boom".to_string(),
            }),
        ));
        assert!(!result.is_complete());
        assert_eq!(result.failures().count(), 1);
    }

    #[test]
    fn a_missing_member_makes_the_result_incomplete() {
        use eikona_core::{asset::ScaledResource, math::Extent2D};

        let mut result = BatchResult::for_batch(2);
        result.outcomes.push((
            AssetKey::from("kid"),
            LoadOutcome::Ready(AssetHandle::new(ScaledResource {
                uri: "data:image/png;base64,".to_string(),
                extent: Extent2D::new(8, 8),
            })),
        ));
        assert!(!result.is_complete());
    }
}
