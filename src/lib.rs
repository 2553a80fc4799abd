#[cfg(feature = "native")]
pub mod app;
pub mod body;
pub mod config;
pub mod math;
pub mod renderer;
pub mod scenario;
#[cfg(feature = "native")]
pub mod ui;
#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "native")]
pub use app::ExplorerApp;
pub use body::{Planet, PlanetId, Record, Star, StarId};
pub use config::ExplorerConfig;
pub use math::{Color, PhysicalScale, PlanetType};
pub use renderer::{DrawSurface, RenderState, Renderer};
pub use scenario::Scenario;

#[derive(thiserror::Error, Debug)]
pub enum ExplorerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;
