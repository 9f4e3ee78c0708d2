use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required, validate_string_length, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ALBUM_ART_URL: &str = "https://placehold.co/600x600/333/FFF?text=Album+Art";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "song-studio")]
#[command(about = "Simulates the custom-song generation backend")]
pub struct CliConfig {
    /// Title of the song to create
    #[arg(long)]
    pub title: String,

    /// Story the song should tell
    #[arg(long, default_value = "")]
    pub description: String,

    /// Musical style
    #[arg(long, default_value = "corrido")]
    pub style: String,

    #[arg(long, help = "Also generate album art for the song")]
    pub with_art: bool,

    #[arg(long, default_value = "3000")]
    pub song_delay_ms: u64,

    #[arg(long, default_value = "2000")]
    pub art_delay_ms: u64,

    #[arg(long, default_value = "2000")]
    pub revision_delay_ms: u64,

    #[arg(long, default_value = DEFAULT_ALBUM_ART_URL)]
    pub album_art_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn song_delay(&self) -> Duration {
        Duration::from_millis(self.song_delay_ms)
    }

    fn art_delay(&self) -> Duration {
        Duration::from_millis(self.art_delay_ms)
    }

    fn revision_delay(&self) -> Duration {
        Duration::from_millis(self.revision_delay_ms)
    }

    fn album_art_url(&self) -> &str {
        &self.album_art_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required("album_art_url", &self.album_art_url)?;
        validate_required("title", &self.title)?;
        validate_string_length("title", &self.title, 1, 200)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(std::iter::once("song-studio").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_match_the_simulated_latencies() {
        let config = parse(&["--title", "Mi Historia"]);

        assert_eq!(config.song_delay(), Duration::from_millis(3000));
        assert_eq!(config.art_delay(), Duration::from_millis(2000));
        assert_eq!(config.revision_delay(), Duration::from_millis(2000));
        assert_eq!(config.album_art_url(), DEFAULT_ALBUM_ART_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_title_fails_validation() {
        let config = parse(&["--title", "  "]);
        assert!(config.validate().is_err());
    }
}
