use crate::domain::model::{AlbumArtResult, ArtRequest, RevisionRequest, SongRequest, SongResult};
use async_trait::async_trait;
use std::time::Duration;

/// Suspension point injected into the actions so tests can run under paused
/// time instead of sleeping for real.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub trait ConfigProvider: Send + Sync {
    fn song_delay(&self) -> Duration;
    fn art_delay(&self) -> Duration;
    fn revision_delay(&self) -> Duration;
    fn album_art_url(&self) -> &str;
}

/// The seam a real generation backend would implement. The shipped
/// implementation only simulates the work.
#[async_trait]
pub trait SongService: Send + Sync {
    async fn create_song(&self, request: &SongRequest) -> anyhow::Result<SongResult>;
    async fn create_album_art(&self, request: &ArtRequest) -> anyhow::Result<AlbumArtResult>;
    async fn revise_song(&self, request: &RevisionRequest) -> anyhow::Result<SongResult>;
}
