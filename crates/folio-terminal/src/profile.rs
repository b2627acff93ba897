//! The portfolio document the content commands render.
//!
//! Authored as TOML and embedded in the binary, the same way built-in
//! themes are. Commands hold a shared reference to the parsed document and
//! turn sections of it into component payloads.

use serde::Deserialize;

use folio_types::error::Result;

/// Embedded default profile document.
const EMBEDDED_PROFILE: &str = include_str!("../profile.toml");

/// The whole portfolio document.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub identity: Identity,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default, rename = "skill_group")]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default, rename = "certification")]
    pub certifications: Vec<Certification>,
    #[serde(default, rename = "contact")]
    pub contacts: Vec<Channel>,
}

/// Who the terminal belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub education: String,
    pub tenure: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One work-history entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
    #[serde(default)]
    pub current: bool,
}

/// One project card.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A named group of skills.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One certification.
#[derive(Debug, Clone, Deserialize)]
pub struct Certification {
    pub name: String,
}

/// One contact channel (email, LinkedIn, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Profile {
    /// Parse a profile document from TOML source.
    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// The profile document embedded in the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED_PROFILE)
    }
}
