//! The single-page portfolio view.

use askama::Template;
use folio_core::catalog::ContentStore;
use folio_core::contact::{mailto_href, tel_href, Acknowledgment, ContactMessage};
use folio_core::filter::{
    filter_projects, promote_category, CategoryFilter, ALL_CATEGORIES, ALL_CATEGORIES_LABEL,
};
use folio_core::media::{document_library, DocumentEntry};
use folio_core::models::{AboutData, HeroSlide};

use crate::error::AppResult;
use crate::query::PageParams;
use crate::views::card::CardView;
use crate::views::detail::{DetailView, SectionBody};
use crate::views::MediaLink;

/// Shown in place of the grid when a filter matches nothing.
pub const EMPTY_GRID_MESSAGE: &str = "No projects in this category yet.";

/// The index page, top to bottom.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub slides: Vec<HeroSlide>,
    pub about: AboutData,
    pub initials: String,
    pub skills: Vec<String>,
    pub socials: Vec<SocialLink>,
    pub contact: ContactView,
    pub filters: Vec<FilterTab>,
    /// Active category, empty when every project is listed.
    pub active_category: String,
    pub cards: Vec<CardView>,
    pub documents: Vec<DocumentGroupView>,
    pub detail: Option<DetailView>,
    pub form: ContactFormView,
    pub year: i32,
}

/// One button of the filter bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTab {
    pub label: String,
    pub value: String,
    pub active: bool,
}

impl FilterTab {
    fn new(value: &str, active: &CategoryFilter) -> Self {
        let label = if value == ALL_CATEGORIES {
            ALL_CATEGORIES_LABEL
        } else {
            value
        };
        Self {
            label: label.to_string(),
            value: value.to_string(),
            active: active.as_str() == value,
        }
    }

    pub fn is_all(&self) -> bool {
        self.value == ALL_CATEGORIES
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: String,
}

/// Contact details with their ready-made links.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub mailto: String,
    pub tel: String,
}

/// A project's row in the document library.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentGroupView {
    pub project_id: String,
    pub title: String,
    pub category: String,
    pub items: Vec<MediaLink>,
}

impl From<DocumentEntry<'_>> for DocumentGroupView {
    fn from(entry: DocumentEntry<'_>) -> Self {
        Self {
            project_id: entry.project.id.clone(),
            title: entry.project.title.clone(),
            category: entry.project.category.clone(),
            items: entry
                .documents
                .iter()
                .map(|item| MediaLink::new(item, "Document"))
                .collect(),
        }
    }
}

/// Banner above the contact form after a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub success: bool,
    pub title: String,
    pub description: String,
}

/// Contact form state: field values plus the outcome of the last submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub notice: Option<Notice>,
}

impl ContactFormView {
    /// Cleared form announcing a received message.
    pub fn acknowledged(ack: &Acknowledgment) -> Self {
        Self {
            notice: Some(Notice {
                success: true,
                title: ack.title.to_string(),
                description: ack.description.to_string(),
            }),
            ..Self::default()
        }
    }

    /// The submitted values, kept so the visitor can correct them.
    pub fn rejected(message: ContactMessage, reason: impl Into<String>) -> Self {
        Self {
            name: message.name,
            email: message.email,
            subject: message.subject,
            message: message.message,
            notice: Some(Notice {
                success: false,
                title: "Message not sent".to_string(),
                description: reason.into(),
            }),
        }
    }
}

impl IndexPage {
    /// Assemble the page for one request.
    ///
    /// An unknown `project` parameter leaves the detail view closed.
    pub fn build(
        store: &ContentStore,
        params: &PageParams,
        form: ContactFormView,
        year: i32,
    ) -> AppResult<Self> {
        let filter = CategoryFilter::from_param(params.category.as_deref());
        let listing = store.listing();

        let mut projects = filter_projects(store.all_projects(), &filter);
        if filter.is_all() && listing.spotlight_first {
            projects = promote_category(projects, &listing.spotlight_category);
        }
        let cards = projects
            .into_iter()
            .map(|p| CardView::build(p, store.policy()))
            .collect::<AppResult<Vec<_>>>()?;

        let filters = store
            .categories()
            .into_iter()
            .map(|value| FilterTab::new(value, &filter))
            .collect();

        let documents = document_library(store.all_projects(), store.policy())
            .into_iter()
            .map(DocumentGroupView::from)
            .collect();

        let detail = params
            .project
            .as_deref()
            .and_then(|id| store.find_project(id))
            .map(|p| DetailView::build(p, store.sections(), store.policy()));

        let about = store.about().clone();
        let contact = store.contact();
        let socials = [
            ("GitHub", &contact.socials.github),
            ("LinkedIn", &contact.socials.linkedin),
        ]
        .into_iter()
        .filter_map(|(label, href)| {
            href.as_ref().map(|href| SocialLink {
                label,
                href: href.clone(),
            })
        })
        .collect();

        Ok(Self {
            slides: store.hero_slides().to_vec(),
            initials: about.initials(),
            about,
            skills: store.skills().to_vec(),
            socials,
            contact: ContactView {
                email: contact.email.clone(),
                phone: contact.phone.clone(),
                location: contact.location.clone(),
                mailto: mailto_href(&contact.email),
                tel: tel_href(&contact.phone),
            },
            filters,
            active_category: match filter {
                CategoryFilter::All => String::new(),
                CategoryFilter::Category(category) => category,
            },
            cards,
            documents,
            detail,
            form,
            year,
        })
    }

    pub fn empty_grid_message(&self) -> &'static str {
        EMPTY_GRID_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::embedded().unwrap()
    }

    fn params(category: Option<&str>, project: Option<&str>) -> PageParams {
        PageParams {
            category: category.map(str::to_string),
            project: project.map(str::to_string),
        }
    }

    fn build(params: &PageParams) -> IndexPage {
        IndexPage::build(&store(), params, ContactFormView::default(), 2026).unwrap()
    }

    #[test]
    fn unfiltered_grid_lists_spotlight_first() {
        let store = store();
        let page = build(&params(None, None));

        assert_eq!(page.cards.len(), store.all_projects().len());
        let spotlight = &store.listing().spotlight_category;
        let boundary = page
            .cards
            .iter()
            .position(|c| &c.category != spotlight)
            .unwrap_or(page.cards.len());
        assert!(page.cards[boundary..].iter().all(|c| &c.category != spotlight));
    }

    #[test]
    fn category_filter_marks_its_tab_active() {
        let page = build(&params(Some("Community"), None));

        assert!(page.cards.iter().all(|c| c.category == "Community"));
        let active: Vec<_> = page.filters.iter().filter(|t| t.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].value, "Community");
        assert_eq!(page.active_category, "Community");
    }

    #[test]
    fn all_tab_comes_first_with_its_label() {
        let page = build(&params(None, None));

        assert!(page.filters[0].is_all());
        assert_eq!(page.filters[0].label, ALL_CATEGORIES_LABEL);
        assert!(page.filters[0].active);
    }

    #[test]
    fn unknown_category_yields_empty_grid() {
        let page = build(&params(Some("Nope"), None));

        assert!(page.cards.is_empty());
        assert!(page.filters.iter().all(|t| !t.active));
    }

    #[test]
    fn deep_link_opens_detail() {
        let page = build(&params(None, Some("smart-compost")));

        assert_eq!(page.detail.map(|d| d.id).as_deref(), Some("smart-compost"));
    }

    #[test]
    fn unknown_deep_link_leaves_detail_closed() {
        let page = build(&params(None, Some("no-such-project")));

        assert!(page.detail.is_none());
    }

    #[test]
    fn document_library_includes_marked_video() {
        let page = build(&params(None, None));

        let compost = page
            .documents
            .iter()
            .find(|g| g.project_id == "smart-compost")
            .expect("smart-compost contributes its demo video");
        assert!(compost.items.iter().any(|i| i.is_video && i.action() == "Watch"));
    }

    #[test]
    fn rejected_form_keeps_values() {
        let message = ContactMessage {
            name: "Ada".into(),
            email: "not-an-email".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };

        let form = ContactFormView::rejected(message, "A valid email address is required");

        assert_eq!(form.email, "not-an-email");
        assert!(!form.notice.unwrap().success);
    }

    #[test]
    fn page_renders_with_contact_links() {
        let page = build(&params(None, None));

        let html = page.render().unwrap();

        assert!(html.contains(&page.contact.mailto));
        assert!(html.contains("&copy; 2026"));
    }
}
