//! Presentational building blocks. All state lives in the page session;
//! these components only render and report clicks upward.

mod container;
mod file_upload;
mod intro;
mod player;
mod spotify_info;
mod text;

pub use container::WrappedContainer;
pub use file_upload::FileUpload;
pub use intro::IntroInformation;
pub use player::WrappedPlayer;
pub use spotify_info::SpotifyInfoText;
pub use text::{FatHeading, InfoText, MutedText};
