mod band;
mod song;

pub use band::{Album, Band};
pub use song::Song;
