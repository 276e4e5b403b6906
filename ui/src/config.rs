//! Static content and tuning for the navbar.
//!
//! Platforms may register their own [`NavConfig`] once at startup (first
//! registration wins). Without one, [`nav_config`] hands out the built-in
//! agency defaults.

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};

use crate::core::scroll::DEFAULT_COMPACT_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Highlighted leading letter.
    pub initial: String,
    pub rest: String,
    /// Highlighted trailing mark.
    pub suffix: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            initial: "A".into(),
            rest: "gency".into(),
            suffix: ".".into(),
        }
    }
}

/// One card in the desktop Services dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub name: String,
    pub description: String,
}

impl ServiceCard {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset (px) past which the header compacts.
    pub compact_threshold: f64,
    pub brand: Brand,
    pub services: Vec<ServiceCard>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            compact_threshold: DEFAULT_COMPACT_THRESHOLD,
            brand: Brand::default(),
            services: vec![
                ServiceCard::new("Web Development", "Create modern, responsive websites"),
                ServiceCard::new("Branding", "Build your unique brand identity"),
                ServiceCard::new("Marketing", "Boost your online presence"),
                ServiceCard::new("SEO", "Rank higher in search results"),
            ],
        }
    }
}

impl NavConfig {
    /// Parse a (possibly partial) JSON document; missing fields keep their defaults.
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }
}

static NAV_CONFIG: OnceCell<NavConfig> = OnceCell::new();
static DEFAULT_CONFIG: Lazy<NavConfig> = Lazy::new(NavConfig::default);

/// Returns `false` if a config was already registered.
pub fn register_config(config: NavConfig) -> bool {
    NAV_CONFIG.set(config).is_ok()
}

pub fn nav_config() -> &'static NavConfig {
    NAV_CONFIG.get().unwrap_or(&*DEFAULT_CONFIG)
}
