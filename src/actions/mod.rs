pub mod studio;

pub use studio::{SongStudio, TokioSleeper};
