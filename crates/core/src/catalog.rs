//! The read-only content catalog.
//!
//! A [`ContentStore`] is built once at startup from a [`Portfolio`] document
//! and shared immutably afterwards.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CoreError;
use crate::filter::{select_by_ids, ALL_CATEGORIES};
use crate::media::MediaPolicy;
use crate::models::{
    AboutData, ContactData, HeroSlide, ListingSettings, Portfolio, Project, SectionToggles,
};

/// The content bundled into the binary.
pub const EMBEDDED_CONTENT: &str = include_str!("../data/portfolio.json");

/// Validate that a project id is a non-empty slug (`[A-Za-z0-9_-]+`).
pub fn validate_project_id(id: &str) -> Result<(), CoreError> {
    if id.is_empty() {
        return Err(CoreError::Validation(
            "Project id must not be empty".to_string(),
        ));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(format!(
            "Project id '{id}' may only contain ASCII letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}

/// Immutable catalog of projects and profile data.
#[derive(Debug, Clone)]
pub struct ContentStore {
    portfolio: Portfolio,
    index: HashMap<String, usize>,
}

impl ContentStore {
    /// Build a store, rejecting malformed or duplicate project ids and the
    /// reserved [`ALL_CATEGORIES`] category.
    pub fn new(portfolio: Portfolio) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(portfolio.projects.len());
        for (position, project) in portfolio.projects.iter().enumerate() {
            validate_project_id(&project.id)?;
            if project.category.trim() == ALL_CATEGORIES {
                return Err(CoreError::Validation(format!(
                    "Project '{}' uses the reserved category '{ALL_CATEGORIES}'",
                    project.id
                )));
            }
            if index.insert(project.id.clone(), position).is_some() {
                return Err(CoreError::Conflict(format!(
                    "Duplicate project id '{}'",
                    project.id
                )));
            }
        }
        Ok(Self { portfolio, index })
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        Self::new(portfolio)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CoreError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Read a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Every project in authored order.
    pub fn all_projects(&self) -> &[Project] {
        &self.portfolio.projects
    }

    /// Look up a project for a deep link or API request.
    pub fn project_by_id(&self, id: &str) -> Result<&Project, CoreError> {
        self.find_project(id).ok_or_else(|| CoreError::NotFound {
            entity: "Project",
            id: id.to_string(),
        })
    }

    /// Like [`Self::project_by_id`], treating a miss as "nothing selected".
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.index
            .get(id)
            .map(|&position| &self.portfolio.projects[position])
    }

    /// Filter bar values: the `"all"` sentinel, then each category once in
    /// first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for project in &self.portfolio.projects {
            if !categories.contains(&project.category.as_str()) {
                categories.push(&project.category);
            }
        }
        categories
    }

    /// Featured projects in catalog order. Unknown ids are ignored.
    pub fn featured_projects(&self) -> Vec<&Project> {
        select_by_ids(&self.portfolio.projects, &self.portfolio.listing.featured)
    }

    pub fn skills(&self) -> &[String] {
        &self.portfolio.skills
    }

    pub fn about(&self) -> &AboutData {
        &self.portfolio.about
    }

    pub fn contact(&self) -> &ContactData {
        &self.portfolio.contact
    }

    pub fn hero_slides(&self) -> &[HeroSlide] {
        &self.portfolio.hero_slides
    }

    pub fn listing(&self) -> &ListingSettings {
        &self.portfolio.listing
    }

    pub fn sections(&self) -> SectionToggles {
        self.portfolio.sections
    }

    pub fn policy(&self) -> &MediaPolicy {
        &self.portfolio.policy
    }

    /// Policy entries keyed by project ids that do not exist in the catalog.
    pub fn dangling_policy_ids(&self) -> Vec<&str> {
        let policy = &self.portfolio.policy;
        let mut ids: Vec<&str> = policy
            .hero_overrides
            .keys()
            .chain(policy.card_rotations.keys())
            .map(String::as_str)
            .chain(policy.document_extras.iter().map(|e| e.project_id.as_str()))
            .chain(self.portfolio.listing.featured.iter().map(String::as_str))
            .filter(|id| !self.index.contains_key(*id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
