//! Handlers for the project catalog API.
//!
//! Every project payload carries its resolved media next to the raw record,
//! so clients never repeat the thumbnail and hero selection themselves.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::filter::{
    filter_projects, promote_category, CategoryFilter, ALL_CATEGORIES, ALL_CATEGORIES_LABEL,
};
use folio_core::media::{
    document_library, partition_gallery, resolve_card_media, resolve_hero, resolve_story,
    CardMedia, MediaPolicy, StoryBlock,
};
use folio_core::models::{MediaItem, Project};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::ListProjectsParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A project as listed: the record plus what its card shows.
#[derive(Debug, Serialize)]
pub struct ProjectSummary<'a> {
    #[serde(flatten)]
    pub project: &'a Project,
    pub card: CardMedia,
}

impl<'a> ProjectSummary<'a> {
    fn new(project: &'a Project, policy: &MediaPolicy) -> Self {
        Self {
            project,
            card: resolve_card_media(project, policy),
        }
    }
}

/// Everything the detail view needs for one project.
#[derive(Debug, Serialize)]
pub struct ProjectDetail<'a> {
    #[serde(flatten)]
    pub project: &'a Project,
    pub card: CardMedia,
    pub hero: MediaItem,
    pub story: Vec<StoryBlock<'a>>,
    pub documents: Vec<&'a MediaItem>,
    pub videos: Vec<&'a MediaItem>,
}

/// One value of the category filter bar.
#[derive(Debug, Serialize)]
pub struct CategoryOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects?category=&spotlight_first=
///
/// List projects in catalog order, narrowed to one category when given.
/// With `spotlight_first` (defaulting to the catalog setting) the spotlight
/// category is moved to the front.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> AppResult<impl IntoResponse> {
    let store = &state.store;
    let listing = store.listing();
    let filter = CategoryFilter::from_param(params.category.as_deref());

    let mut projects = filter_projects(store.all_projects(), &filter);
    if params.spotlight_first.unwrap_or(listing.spotlight_first) {
        projects = promote_category(projects, &listing.spotlight_category);
    }

    let data: Vec<ProjectSummary> = projects
        .into_iter()
        .map(|p| ProjectSummary::new(p, store.policy()))
        .collect();

    Ok(Json(DataResponse { data }).into_response())
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let store = &state.store;
    let project = store.project_by_id(&id)?;
    let gallery = partition_gallery(project);

    let data = ProjectDetail {
        project,
        card: resolve_card_media(project, store.policy()),
        hero: resolve_hero(project, store.policy()),
        story: resolve_story(project),
        documents: gallery.documents,
        videos: gallery.videos,
    };

    Ok(Json(DataResponse { data }).into_response())
}

/// GET /api/v1/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let store = &state.store;
    let data: Vec<ProjectSummary> = store
        .featured_projects()
        .into_iter()
        .map(|p| ProjectSummary::new(p, store.policy()))
        .collect();

    Ok(Json(DataResponse { data }).into_response())
}

/// GET /api/v1/categories
///
/// The `all` sentinel first, then each category once in catalog order.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data: Vec<CategoryOption> = state
        .store
        .categories()
        .into_iter()
        .map(|value| CategoryOption {
            value,
            label: if value == ALL_CATEGORIES {
                ALL_CATEGORIES_LABEL
            } else {
                value
            },
        })
        .collect();

    Ok(Json(DataResponse { data }).into_response())
}

/// GET /api/v1/documents
pub async fn list_documents(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let store = &state.store;
    let data = document_library(store.all_projects(), store.policy());

    Ok(Json(DataResponse { data }).into_response())
}
