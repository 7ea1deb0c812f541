pub mod music;
pub use music::{api_routes, search_route, song_route};
