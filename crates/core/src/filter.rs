//! Category filtering and spotlight ordering for project listings.

use crate::models::Project;

/// Filter value that selects every project.
pub const ALL_CATEGORIES: &str = "all";

/// Label shown for [`ALL_CATEGORIES`] in the filter bar.
pub const ALL_CATEGORIES_LABEL: &str = "All Projects";

/// The active category selection of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// Interpret a query parameter. Missing, blank, or `"all"` selects everything.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") | Some(ALL_CATEGORIES) => CategoryFilter::All,
            Some(category) => CategoryFilter::Category(category.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// The value as it appears in the filter bar.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => project.category == *category,
        }
    }
}

/// Projects selected by `filter`, in their original relative order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &CategoryFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Move projects in `category` to the front.
///
/// The sort is stable, so relative order inside each partition is untouched.
pub fn promote_category<'a>(mut projects: Vec<&'a Project>, category: &str) -> Vec<&'a Project> {
    projects.sort_by_key(|p| p.category != category);
    projects
}

/// Projects whose id is listed in `ids`, in catalog order.
pub fn select_by_ids<'a>(projects: &'a [Project], ids: &[String]) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| ids.iter().any(|id| *id == p.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::fixtures::project;

    fn catalog() -> Vec<Project> {
        vec![
            project("a", "Robotics"),
            project("b", "Spotlight"),
            project("c", "Community"),
            project("d", "Robotics"),
            project("e", "Spotlight"),
            project("f", "Community"),
        ]
    }

    fn ids<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn from_param_recognizes_sentinel() {
        assert!(CategoryFilter::from_param(None).is_all());
        assert!(CategoryFilter::from_param(Some("")).is_all());
        assert!(CategoryFilter::from_param(Some(" all ")).is_all());
        assert_eq!(
            CategoryFilter::from_param(Some("Robotics")),
            CategoryFilter::Category("Robotics".into())
        );
    }

    #[test]
    fn every_category_yields_exact_subsequence() {
        let projects = catalog();
        for category in ["Robotics", "Spotlight", "Community"] {
            let filtered = filter_projects(&projects, &CategoryFilter::Category(category.into()));
            let expected: Vec<&Project> =
                projects.iter().filter(|p| p.category == category).collect();
            assert_eq!(filtered, expected, "category {category}");
        }
    }

    #[test]
    fn all_is_identity() {
        let projects = catalog();
        let filtered = filter_projects(&projects, &CategoryFilter::All);
        assert_eq!(filtered.len(), projects.len());
        assert_eq!(ids(&filtered), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn unknown_category_is_empty_not_error() {
        let projects = catalog();
        let filtered = filter_projects(&projects, &CategoryFilter::Category("Nope".into()));
        assert!(filtered.is_empty());
    }

    #[test]
    fn category_match_is_exact() {
        let projects = catalog();
        let filtered = filter_projects(&projects, &CategoryFilter::Category("robotics".into()));
        assert!(filtered.is_empty());
    }

    #[test]
    fn promotion_is_stable_within_partitions() {
        let projects = catalog();
        let promoted = promote_category(filter_projects(&projects, &CategoryFilter::All), "Spotlight");
        assert_eq!(ids(&promoted), vec!["b", "e", "a", "c", "d", "f"]);
    }

    #[test]
    fn promotion_is_idempotent() {
        let projects = catalog();
        let once = promote_category(projects.iter().collect(), "Community");
        let twice = promote_category(once.clone(), "Community");
        assert_eq!(once, twice);
    }

    #[test]
    fn select_by_ids_keeps_catalog_order() {
        let projects = catalog();
        let selected = select_by_ids(&projects, &["e".into(), "a".into(), "zzz".into()]);
        assert_eq!(ids(&selected), vec!["a", "e"]);
    }
}
