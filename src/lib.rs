pub mod actions;
pub mod api;
pub mod config;
pub mod domain;
pub mod utils;

pub use actions::{SongStudio, TokioSleeper};
pub use api::{create_api_response, handle_api_error, ApiResponse};
pub use config::CliConfig;
pub use domain::model::{AlbumArtResult, ArtRequest, RevisionRequest, SongRequest, SongResult};
pub use domain::ports::{ConfigProvider, Sleeper, SongService};
pub use utils::error::{AppError, Result};
