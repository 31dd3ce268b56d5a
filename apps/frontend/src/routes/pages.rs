use axum::{
    extract::{Path, State},
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::errors::AppError;
use crate::locale::{resolve, switched_path, LocalePath};
use crate::pages::{self, Page, RenderContext};
use crate::state::AppState;

/// GET /
pub async fn handle_root(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&switched_path("/", state.locales.default_locale().as_str()))
}

/// GET /:locale and /:locale/
///
/// A page slug without a locale prefix (`/resume`) is redirected under the
/// default locale; anything else is treated as a locale candidate.
pub async fn handle_locale_root(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    uri: Uri,
) -> Result<Response, AppError> {
    let parsed = LocalePath::parse_known(uri.path(), state.locales.supported());
    if parsed.locale_segment.is_none() {
        if let Some(page) = Page::from_slug(&segment).filter(|p| *p != Page::Home) {
            // "/resume/" and "/resume" both land on "/{default}/resume".
            let path = switched_path(
                uri.path().trim_end_matches('/'),
                state.locales.default_locale().as_str(),
            );
            let target = with_query(path, uri.query());
            debug!(?page, %target, "Redirecting unlocalized page");
            return Ok(Redirect::temporary(&target).into_response());
        }
    }

    // Switch targets are computed from "/{segment}/" so "/zh" behaves like "/zh/".
    let current = with_query(format!("/{segment}/"), uri.query());
    render_page(&state, &segment, Page::Home.slug(), &current)
        .await
        .map(IntoResponse::into_response)
}

/// GET /:locale/:page
pub async fn handle_page(
    State(state): State<AppState>,
    Path((locale, page)): Path<(String, String)>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let current = with_query(uri.path().to_string(), uri.query());
    render_page(&state, &locale, &page, &current).await
}

fn with_query(mut path: String, query: Option<&str>) -> String {
    if let Some(query) = query {
        path.push('?');
        path.push_str(query);
    }
    path
}

pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}

/// Resolve, then load the bundle, then render. A bundle failure aborts only
/// this render. `current` is the path plus query the switcher rewrites.
async fn render_page(
    state: &AppState,
    candidate: &str,
    slug: &str,
    current: &str,
) -> Result<Html<String>, AppError> {
    let locale = resolve(Some(candidate), &state.locales);
    let page = Page::from_slug(slug)
        .ok_or_else(|| AppError::NotFound(format!("No page at {current}")))?;

    let bundle = state.bundles.load(&locale).await?;
    let ctx = RenderContext {
        bundle: &bundle,
        current_path: current,
        supported: state.locales.supported(),
    };
    Ok(Html(pages::render(page, &ctx)))
}
