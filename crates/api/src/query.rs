//! Shared query parameter types for API and page handlers.

use serde::Deserialize;

/// Query parameters for project listings (`?category=&spotlight_first=`).
///
/// `category` accepts a category name or the `all` sentinel. When
/// `spotlight_first` is absent the catalog's listing settings decide.
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsParams {
    pub category: Option<String>,
    pub spotlight_first: Option<bool>,
}

/// Query parameters of the index page (`?category=&project=`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub category: Option<String>,
    /// Deep link to a project; unknown ids are ignored.
    pub project: Option<String>,
}
