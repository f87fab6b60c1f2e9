//! Explicit ownership of carousel engines by container id.

use std::collections::btree_map::{BTreeMap, Entry};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Configuration;
use crate::engine::{NavigationEngine, Outcome};
use crate::error::Error;
use crate::events::NavRequest;
use crate::slides::SlideSet;

/// Engines keyed by the id of the container element they drive.
#[derive(Debug, Default)]
pub struct Carousels {
    engines: BTreeMap<String, NavigationEngine>,
}

impl Carousels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every carousel listed in a validated configuration.
    pub fn from_config(cfg: &Configuration) -> Result<Self> {
        let mut carousels = Self::new();
        for entry in &cfg.carousels {
            let engine = entry
                .engine()
                .with_context(|| format!("building carousel '{}'", entry.id))?;
            carousels.insert(entry.id.clone(), engine)?;
        }
        Ok(carousels)
    }

    /// Create and register an engine for `id`.
    ///
    /// # Errors
    /// [`Error::AlreadyInitialized`] if `id` is taken, or any construction
    /// error from [`NavigationEngine::with_start`].
    pub fn init(
        &mut self,
        id: impl Into<String>,
        slides: SlideSet,
        items_per_slide: usize,
        start_index: usize,
    ) -> Result<&mut NavigationEngine, Error> {
        let id = id.into();
        if self.engines.contains_key(&id) {
            return Err(Error::AlreadyInitialized(id));
        }
        let engine = NavigationEngine::with_start(slides, items_per_slide, start_index)?;
        self.insert(id, engine)
    }

    /// Register an already-built engine.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        engine: NavigationEngine,
    ) -> Result<&mut NavigationEngine, Error> {
        let id = id.into();
        match self.engines.entry(id) {
            Entry::Occupied(e) => {
                Err(Error::AlreadyInitialized(e.key().clone()))
            }
            Entry::Vacant(e) => {
                info!(id = %e.key(), dots = engine.dot_count(), "carousel initialized");
                Ok(e.insert(engine))
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NavigationEngine> {
        self.engines.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut NavigationEngine> {
        self.engines.get_mut(id)
    }

    /// Drop ownership of a carousel, returning its engine.
    pub fn remove(&mut self, id: &str) -> Option<NavigationEngine> {
        self.engines.remove(id)
    }

    /// Route a request to the carousel registered under `id`.
    ///
    /// # Errors
    /// [`Error::UnknownCarousel`] if nothing is registered under `id`.
    pub fn dispatch(&mut self, id: &str, request: NavRequest) -> Result<Outcome, Error> {
        let engine = self
            .engines
            .get_mut(id)
            .ok_or_else(|| Error::UnknownCarousel(id.to_string()))?;
        Ok(engine.apply(request))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
