use thiserror::Error;

/// Library error type for carousel construction and lookups.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The slide set or engine settings cannot describe a usable carousel.
    #[error("invalid carousel configuration: {0}")]
    InvalidConfiguration(String),

    /// A width lookup addressed a slide that does not exist.
    #[error("slide index {index} out of range (slide count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// A carousel with this container id is already owned by the registry.
    #[error("carousel already initialized: {0}")]
    AlreadyInitialized(String),

    /// No carousel is registered under this container id.
    #[error("unknown carousel: {0}")]
    UnknownCarousel(String),
}
