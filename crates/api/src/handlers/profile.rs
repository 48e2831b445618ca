use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::contact::{mailto_href, tel_href};
use folio_core::models::{AboutData, ContactData, HeroSlide};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Contact details plus ready-to-use `mailto:` and `tel:` links.
#[derive(Debug, Serialize)]
pub struct ContactLinks<'a> {
    #[serde(flatten)]
    pub contact: &'a ContactData,
    pub mailto: String,
    pub tel: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse<'a> {
    pub about: &'a AboutData,
    pub skills: &'a [String],
    pub contact: ContactLinks<'a>,
    pub hero_slides: &'a [HeroSlide],
}

/// GET /api/v1/profile
///
/// Everything shown around the project grid: about, skills, contact
/// details and the hero carousel.
pub async fn get_profile(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let store = &state.store;
    let contact = store.contact();

    let data = ProfileResponse {
        about: store.about(),
        skills: store.skills(),
        contact: ContactLinks {
            contact,
            mailto: mailto_href(&contact.email),
            tel: tel_href(&contact.phone),
        },
        hero_slides: store.hero_slides(),
    };

    Ok(Json(DataResponse { data }).into_response())
}
