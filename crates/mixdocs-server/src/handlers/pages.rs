//! Pages API endpoint.
//!
//! Returns rendered pages as JSON with title, sections, table of contents,
//! breadcrumbs and HTML content.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};
use mixdocs_content::{Page, Section};
use mixdocs_nav::BreadcrumbItem;
use mixdocs_renderer::TocEntry;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    meta: PageMeta,
    sections: Vec<SectionSummary>,
    breadcrumbs: Vec<BreadcrumbItem>,
    toc: Vec<TocEntry>,
    /// Rendered article HTML.
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
struct PageMeta {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    /// URL path.
    path: String,
}

/// Entry of GET /api/pages.
#[derive(Serialize)]
pub(crate) struct PageSummary {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    path: String,
    sections: Vec<SectionSummary>,
}

#[derive(Serialize)]
pub(crate) struct SectionSummary {
    id: String,
    title: String,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            title: section.title.clone(),
        }
    }
}

impl From<&Page> for PageSummary {
    fn from(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            subtitle: page.subtitle.clone(),
            path: page.href(),
            sections: page.sections.iter().map(SectionSummary::from).collect(),
        }
    }
}

/// Handle GET /api/pages.
pub(crate) async fn list_pages(State(state): State<Arc<AppState>>) -> Json<Vec<PageSummary>> {
    let pages = state.site.registry().pages();
    Json(pages.iter().map(PageSummary::from).collect())
}

/// Handle GET /api/pages/ (root page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_page_impl("", &state, &headers)
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_page_impl(&path, &state, &headers)
}

fn get_page_impl(path: &str, state: &AppState, headers: &HeaderMap) -> Result<Response, ServerError> {
    let site = &state.site;
    let href = format!("/{path}");

    let nav = site
        .state::<&str>(&href, None)
        .map_err(|e| ServerError::from_site(e, &href))?;
    let page = site
        .registry()
        .get_page(&nav.location().path)
        .map_err(|_| ServerError::PageNotFound(href.clone()))?;
    let rendered = site
        .render(&nav)
        .map_err(|e| ServerError::from_site(e, &href))?;

    let etag = compute_etag(state.version(), &rendered.html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let response = PageResponse {
        meta: PageMeta {
            title: rendered.title,
            subtitle: page.subtitle.clone(),
            path: page.href(),
        },
        sections: page.sections.iter().map(SectionSummary::from).collect(),
        breadcrumbs: rendered.breadcrumbs,
        toc: rendered.toc,
        content: rendered.html,
    };

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(compute_etag("1.0.0", "content"), compute_etag("1.0.1", "content"));
    }

    #[test]
    fn test_compute_etag_includes_content() {
        assert_ne!(compute_etag("1.0.0", "content1"), compute_etag("1.0.0", "content2"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_page_meta_omits_missing_subtitle() {
        let meta = PageMeta {
            title: "Tutorials".to_owned(),
            subtitle: None,
            path: "/tutorials".to_owned(),
        };

        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["title"], "Tutorials");
        assert_eq!(json["path"], "/tutorials");
        assert!(json.get("subtitle").is_none());
    }
}
