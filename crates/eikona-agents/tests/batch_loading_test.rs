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

use async_trait::async_trait;
use eikona_agents::load_agent::{AssetFetcher, BatchEvent, BatchLoadAgent, FsFetcher, LoadOutcome};
use eikona_core::{
    asset::{AssetDescriptor, AssetKey},
    math::Extent2D,
    BatchError, LoadError,
};
use eikona_lanes::image_lane::PNG_DATA_URI_PREFIX;
use std::{
    collections::HashMap,
    num::NonZeroU32,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use tempfile::TempDir;

const DEADLINE: Duration = Duration::from_secs(5);

fn scale(factor: u32) -> NonZeroU32 {
    NonZeroU32::new(factor).unwrap()
}

/// Writes a solid-color PNG fixture and returns its path.
fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    let pixel = image::Rgba([180u8, 40, 220, 255]);
    image::RgbaImage::from_pixel(width, height, pixel)
        .save(&path)
        .expect("fixture PNG should save");
    path
}

/// A fetcher that delays each path by a configured amount before reading
/// it from disk, to force a specific completion order.
struct DelayedFetcher {
    delays: HashMap<PathBuf, Duration>,
}

#[async_trait]
impl AssetFetcher for DelayedFetcher {
    async fn fetch(&self, source: &Path) -> std::io::Result<Vec<u8>> {
        if let Some(delay) = self.delays.get(source) {
            tokio::time::sleep(*delay).await;
        }
        FsFetcher.fetch(source).await
    }
}

/// A fetcher that never delivers within any reasonable deadline.
struct StalledFetcher;

#[async_trait]
impl AssetFetcher for StalledFetcher {
    async fn fetch(&self, _source: &Path) -> std::io::Result<Vec<u8>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn batch_produces_scaled_resources_by_key() {
    let dir = TempDir::new().unwrap();
    let descriptors = vec![
        AssetDescriptor::new("kid", write_png(&dir, "kid.png", 2, 2)),
        AssetDescriptor::new("tile", write_png(&dir, "tile.png", 3, 1)),
    ];

    let agent = BatchLoadAgent::new(scale(4), DEADLINE);
    let result = agent.load_batch(&descriptors).await.unwrap();

    assert!(result.is_complete());
    assert_eq!(result.assets.len(), 2);

    let kid = &result.assets[&AssetKey::from("kid")];
    assert_eq!(kid.extent, Extent2D::new(8, 8));
    assert!(kid.uri.starts_with(PNG_DATA_URI_PREFIX));

    let tile = &result.assets[&AssetKey::from("tile")];
    assert_eq!(tile.extent, Extent2D::new(12, 4));
}

#[tokio::test]
async fn reverse_completion_order_still_resolves_once_with_all_members() {
    let dir = TempDir::new().unwrap();
    let paths = [
        write_png(&dir, "first.png", 1, 1),
        write_png(&dir, "second.png", 2, 2),
        write_png(&dir, "third.png", 3, 3),
    ];
    let descriptors = vec![
        AssetDescriptor::new("first", &paths[0]),
        AssetDescriptor::new("second", &paths[1]),
        AssetDescriptor::new("third", &paths[2]),
    ];

    // Delays force the members to finish in reverse launch order.
    let delays = HashMap::from([
        (paths[0].clone(), Duration::from_millis(150)),
        (paths[1].clone(), Duration::from_millis(100)),
        (paths[2].clone(), Duration::from_millis(50)),
    ]);
    let agent = BatchLoadAgent::new(scale(2), DEADLINE)
        .with_fetcher(Arc::new(DelayedFetcher { delays }));

    let result = agent.load_batch(&descriptors).await.unwrap();

    assert!(result.is_complete());
    let finish_order: Vec<_> = result
        .outcomes
        .iter()
        .map(|(key, _)| key.as_str().to_string())
        .collect();
    assert_eq!(finish_order, ["third", "second", "first"]);

    // Each key still maps to the resource of its own source.
    assert_eq!(
        result.assets[&AssetKey::from("first")].extent,
        Extent2D::new(2, 2)
    );
    assert_eq!(
        result.assets[&AssetKey::from("second")].extent,
        Extent2D::new(4, 4)
    );
    assert_eq!(
        result.assets[&AssetKey::from("third")].extent,
        Extent2D::new(6, 6)
    );
}

#[tokio::test]
async fn empty_batch_resolves_immediately() {
    let agent = BatchLoadAgent::new(scale(4), DEADLINE);
    let result = agent.load_batch(&[]).await.unwrap();

    assert!(result.is_complete());
    assert!(result.assets.is_empty());
    assert!(result.outcomes.is_empty());
}

#[tokio::test]
async fn duplicate_keys_are_rejected_before_loading() {
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "kid.png", 1, 1);
    let descriptors = vec![
        AssetDescriptor::new("kid", &path),
        AssetDescriptor::new("kid", &path),
    ];

    let agent = BatchLoadAgent::new(scale(4), DEADLINE);
    let err = agent.load_batch(&descriptors).await.unwrap_err();

    assert_eq!(err, BatchError::DuplicateKey(AssetKey::from("kid")));
}

#[tokio::test]
async fn missing_and_corrupt_sources_fail_without_wedging_the_batch() {
    let dir = TempDir::new().unwrap();
    let corrupt = dir.path().join("corrupt.png");
    std::fs::write(&corrupt, b"not a png at all").unwrap();
    let descriptors = vec![
        AssetDescriptor::new("good", write_png(&dir, "good.png", 2, 1)),
        AssetDescriptor::new("missing", dir.path().join("nowhere.png")),
        AssetDescriptor::new("corrupt", corrupt),
    ];

    let agent = BatchLoadAgent::new(scale(4), DEADLINE);
    let result = agent.load_batch(&descriptors).await.unwrap();

    assert!(!result.is_complete());
    assert_eq!(result.outcomes.len(), 3);
    assert_eq!(result.assets.len(), 1);
    assert!(result.assets.contains_key(&AssetKey::from("good")));

    let failures: HashMap<_, _> = result
        .failures()
        .map(|(key, err)| (key.as_str().to_string(), err))
        .collect();
    assert!(matches!(failures["missing"], LoadError::Io { .. }));
    assert!(matches!(failures["corrupt"], LoadError::Decode { .. }));
}

#[tokio::test]
async fn stalled_source_times_out_and_the_batch_still_resolves() {
    let descriptors = vec![AssetDescriptor::new("stuck", "stuck.png")];

    let agent = BatchLoadAgent::new(scale(4), Duration::from_millis(50))
        .with_fetcher(Arc::new(StalledFetcher));
    let result = agent.load_batch(&descriptors).await.unwrap();

    assert!(!result.is_complete());
    match &result.outcomes[0] {
        (key, LoadOutcome::Failed(LoadError::TimedOut { after, .. })) => {
            assert_eq!(key.as_str(), "stuck");
            assert_eq!(*after, Duration::from_millis(50));
        }
        other => panic!("expected timeout outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn progress_events_cover_every_member_and_the_finish() {
    let dir = TempDir::new().unwrap();
    let descriptors = vec![
        AssetDescriptor::new("a", write_png(&dir, "a.png", 1, 1)),
        AssetDescriptor::new("b", write_png(&dir, "b.png", 1, 1)),
    ];

    let (sender, receiver) = flume::unbounded();
    let agent = BatchLoadAgent::new(scale(2), DEADLINE).with_events(sender);
    let result = agent.load_batch(&descriptors).await.unwrap();
    assert!(result.is_complete());
    drop(agent);

    let events: Vec<BatchEvent> = receiver.iter().collect();
    assert_eq!(events.len(), 3);
    let mut remaining_seen = Vec::new();
    for event in &events[..2] {
        match event {
            BatchEvent::ItemFinished { ready, remaining, .. } => {
                assert!(*ready);
                remaining_seen.push(*remaining);
            }
            other => panic!("expected item event, got {other:?}"),
        }
    }
    assert_eq!(remaining_seen, [1, 0]);
    assert!(matches!(
        events[2],
        BatchEvent::BatchFinished { ready: 2, failed: 0 }
    ));
}
