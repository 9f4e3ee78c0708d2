use crate::domain::model::{AlbumArtResult, ArtRequest, RevisionRequest, SongRequest, SongResult};
use crate::domain::ports::{ConfigProvider, Sleeper, SongService};
use async_trait::async_trait;
use std::time::Duration;

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

const SAMPLE_LYRICS: &str = "Here is a sample lyric written for your song.\n\n\
VERSE 1\n\
The first verse of your custom ballad goes here.\n\
From the story you shared we have made something unique.\n\n\
CHORUS\n\
This is the chorus of your song,\n\
Singing your story loud and strong.\n\n\
VERSE 2\n\
The narrative carries on from there,\n\
With more of the moments you wanted to share.";

const REVISION_NOTE: &str = "This section was revised following your instructions.\n\
We adjusted the tone and content as you requested.";

/// Stand-in for the future generation backend: each operation logs its
/// input, suspends for the configured delay, and returns a canned payload.
/// Calls are independent and stateless, so concurrent invocations need no
/// coordination.
pub struct SongStudio<S: Sleeper, C: ConfigProvider> {
    sleeper: S,
    config: C,
}

impl<S: Sleeper, C: ConfigProvider> SongStudio<S, C> {
    pub fn new(sleeper: S, config: C) -> Self {
        Self { sleeper, config }
    }
}

#[async_trait]
impl<S: Sleeper, C: ConfigProvider> SongService for SongStudio<S, C> {
    async fn create_song(&self, request: &SongRequest) -> anyhow::Result<SongResult> {
        tracing::info!("Creating song: {}", request.title);

        self.sleeper.sleep(self.config.song_delay()).await;

        Ok(SongResult {
            success: true,
            lyrics: SAMPLE_LYRICS.to_string(),
        })
    }

    async fn create_album_art(&self, request: &ArtRequest) -> anyhow::Result<AlbumArtResult> {
        tracing::info!(
            "Generating album art for: {} (style: {})",
            request.description,
            request.style
        );

        self.sleeper.sleep(self.config.art_delay()).await;

        Ok(AlbumArtResult {
            success: true,
            image_url: self.config.album_art_url().to_string(),
        })
    }

    async fn revise_song(&self, request: &RevisionRequest) -> anyhow::Result<SongResult> {
        tracing::info!("Revising song with instructions: {}", request.instructions);

        self.sleeper.sleep(self.config.revision_delay()).await;

        Ok(SongResult {
            success: true,
            lyrics: format!(
                "{}\n\n[REVISION]\n{}",
                request.original_lyrics, REVISION_NOTE
            ),
        })
    }
}
