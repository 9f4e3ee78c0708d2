// Domain layer: request/result models and ports (interfaces).

pub mod model;
pub mod ports;

pub use crate::domain::model::{
    AlbumArtResult, ArtRequest, RevisionRequest, SongRequest, SongResult,
};
pub use crate::domain::ports::{ConfigProvider, Sleeper, SongService};
