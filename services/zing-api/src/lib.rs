pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod logging;
pub mod routers;
pub mod secrets;
pub mod server;
pub mod zing;

pub use catalog::MusicCatalog;
pub use config::ServerConfig;
pub use error::{ApiError, CatalogError};
pub use server::{AppState, Server, build_router};
