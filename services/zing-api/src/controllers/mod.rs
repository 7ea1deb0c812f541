pub mod music;
pub use music::MusicController;
