pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod layout;
pub mod registry;
pub mod slides;
pub mod tasks {
    pub mod controller;
}

pub use engine::{Edge, NavigationEngine, NavigationResult, Outcome};
pub use error::Error;
pub use events::{NavRequest, RenderCommand};
pub use registry::Carousels;
pub use slides::SlideSet;
