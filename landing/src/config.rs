//! Site configuration: document metadata and hero copy.
//!
//! Every field has a default matching the production page, so a config file
//! only needs to name what it overrides:
//!
//! ```json
//! { "meta": { "title": "Certifier - Staging" } }
//! ```
//!
//! Navigation items and partner logos are not configurable; they live as
//! constants next to the components that render them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LandingError;
use crate::sections::hero::{
    DEFAULT_CTA_BUTTON_LINK, DEFAULT_CTA_BUTTON_TEXT, DEFAULT_DESCRIPTION,
    DEFAULT_SIGN_UP_BUTTON_LINK, DEFAULT_SIGN_UP_BUTTON_TEXT, DEFAULT_TITLE,
};

/// Top-level site configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document head metadata
    pub meta: SiteMeta,
    /// Hero section copy and call-to-action links
    pub hero: HeroCopy,
}

impl SiteConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LandingError> {
        let raw = std::fs::read_to_string(path).map_err(|e| LandingError::io(path, e))?;
        Self::from_json(&raw).map_err(|source| LandingError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Metadata rendered into `<head>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    /// Document title
    pub title: String,
    /// `<meta name="description">`
    pub description: String,
    /// OpenGraph properties for social previews
    pub open_graph: OpenGraph,
    /// `twitter:card` kind
    pub twitter_card: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            title: "Certificate Maker Online - Create & Send Digital Certificates".into(),
            description: "Certifier is a digital credentials infrastructure. Easily make, share and verify digital certificates on autopilot. All-in-one platform for generation certificates and mass sending emails to recipients. Certificate maker with user friendly interface, ready-made templates, and delivery emails.".into(),
            open_graph: OpenGraph::default(),
            twitter_card: "summary_large_image".into(),
        }
    }
}

/// OpenGraph preview settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraph {
    /// `og:type`
    #[serde(rename = "type")]
    pub kind: String,
    /// `og:image` URL
    pub image_url: String,
    /// `og:image:alt`
    pub image_alt: String,
}

impl Default for OpenGraph {
    fn default() -> Self {
        Self {
            kind: "website".into(),
            image_url: "https://res.cloudinary.com/certifier/image/upload/v1745403347/Certifier_-_Create_distribute_and_manage_digital_credentials_OpenGraph_dvkn5i.jpg".into(),
            image_alt: "Certifier - Create, distribute, and manage digital credentials".into(),
        }
    }
}

/// Hero section copy. Defaults match the hero component's own prop defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCopy {
    /// Headline
    pub title: String,
    /// Paragraph under the headline
    pub description: String,
    /// Primary call-to-action label
    pub cta_button_text: String,
    /// Primary call-to-action destination
    pub cta_button_link: String,
    /// Secondary (sign up) label
    pub sign_up_button_text: String,
    /// Secondary (sign up) destination
    pub sign_up_button_link: String,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            description: DEFAULT_DESCRIPTION.into(),
            cta_button_text: DEFAULT_CTA_BUTTON_TEXT.into(),
            cta_button_link: DEFAULT_CTA_BUTTON_LINK.into(),
            sign_up_button_text: DEFAULT_SIGN_UP_BUTTON_TEXT.into(),
            sign_up_button_link: DEFAULT_SIGN_UP_BUTTON_LINK.into(),
        }
    }
}
