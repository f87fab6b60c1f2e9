use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;

use crate::engine::NavigationEngine;
use crate::layout;
use crate::slides::SlideSet;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// How long the renderer keeps the boundary bump styling applied.
    #[serde(with = "humantime_serde")]
    pub bump_duration: Duration,
    /// Carousels to initialise, keyed by container id.
    pub carousels: Vec<CarouselConfig>,
}

impl Configuration {
    const fn default_bump_duration() -> Duration {
        Duration::from_millis(500)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            self.bump_duration > Duration::ZERO,
            "bump-duration must be greater than zero"
        );
        let mut seen = HashSet::new();
        for carousel in &self.carousels {
            ensure!(
                seen.insert(carousel.id.as_str()),
                "duplicate carousel id: {}",
                carousel.id
            );
            carousel
                .validate()
                .with_context(|| format!("invalid carousel '{}'", carousel.id))?;
        }
        Ok(self)
    }

    pub fn carousel(&self, id: &str) -> Option<&CarouselConfig> {
        self.carousels.iter().find(|c| c.id == id)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            bump_duration: Self::default_bump_duration(),
            carousels: Vec::new(),
        }
    }
}

/// One carousel: engine settings plus either measured widths or an evenly
/// divided container.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CarouselConfig {
    pub id: String,
    #[serde(default = "CarouselConfig::default_items_per_slide")]
    pub items_per_slide: usize,
    #[serde(default)]
    pub start_index: usize,
    #[serde(default)]
    pub widths: Option<Vec<f64>>,
    #[serde(default)]
    pub container_width: Option<f64>,
    #[serde(default)]
    pub slide_count: Option<usize>,
}

impl CarouselConfig {
    const fn default_items_per_slide() -> usize {
        1
    }

    /// Resolve slide widths from whichever layout source is configured.
    pub fn slide_widths(&self) -> Result<Vec<f64>> {
        match (&self.widths, self.container_width, self.slide_count) {
            (Some(widths), None, None) => Ok(widths.clone()),
            (None, Some(container), Some(count)) => Ok(layout::uniform_widths(
                container,
                count,
                self.items_per_slide,
            )),
            (None, Some(_), None) | (None, None, Some(_)) => {
                bail!("container-width and slide-count must be given together")
            }
            (None, None, None) => bail!("either widths or container-width/slide-count is required"),
            (Some(_), _, _) => bail!("widths cannot be combined with container-width/slide-count"),
        }
    }

    pub fn slide_set(&self) -> Result<SlideSet> {
        Ok(SlideSet::new(self.slide_widths()?)?)
    }

    /// Build the engine this entry describes.
    pub fn engine(&self) -> Result<NavigationEngine> {
        Ok(NavigationEngine::with_start(
            self.slide_set()?,
            self.items_per_slide,
            self.start_index,
        )?)
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.id.trim().is_empty(), "id must not be empty");
        ensure!(
            self.items_per_slide >= 1,
            "items-per-slide must be at least 1"
        );
        if let Some(width) = self.container_width {
            ensure!(
                width.is_finite() && width >= 0.0,
                "container-width must be a non-negative number"
            );
        }
        self.engine().map(|_| ())
    }
}
