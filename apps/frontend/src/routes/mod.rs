pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::handle_root))
        // Localized pages
        .route("/:locale", get(pages::handle_locale_root))
        .route("/:locale/", get(pages::handle_locale_root))
        .route("/:locale/:page", get(pages::handle_page))
        .fallback(pages::handle_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::i18n::StaticBundleLoader;
    use crate::locale::{LocaleConfig, SupportedLocales};

    fn state_with(loader: StaticBundleLoader) -> AppState {
        let supported = SupportedLocales::new(["en", "zh"]).unwrap();
        AppState {
            locales: LocaleConfig::new(supported, "en").unwrap(),
            bundles: Arc::new(loader),
        }
    }

    fn app() -> Router {
        build_router(state_with(StaticBundleLoader::builtin().unwrap()))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get(app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_root_redirects_to_default_locale() {
        let response = get(app(), "/").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/en/");
    }

    #[tokio::test]
    async fn test_supported_locale_renders_its_bundle() {
        let response = get(app(), "/zh/resume").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<html lang=\"zh\">"));
        assert!(html.contains("上传您的简历"));
        assert!(html.contains("<option value=\"/en/resume\">English</option>"));
    }

    #[tokio::test]
    async fn test_unsupported_locale_renders_default() {
        let response = get(app(), "/fr/resume").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("Upload your resume"));
    }

    #[tokio::test]
    async fn test_uppercase_locale_is_not_normalized() {
        let html = body_text(get(app(), "/ZH/jobs").await).await;
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("Provide job descriptions"));
    }

    #[tokio::test]
    async fn test_locale_home_with_and_without_slash() {
        for uri in ["/zh", "/zh/"] {
            let response = get(app(), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_text(response).await.contains("拿下面试机会"));
        }
    }

    fn option_values(html: &str) -> Vec<String> {
        html.split("<option value=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_switcher_targets_on_locale_home_resolve() {
        for uri in ["/zh", "/zh/", "/fr"] {
            let html = body_text(get(app(), uri).await).await;
            let targets = option_values(&html);
            assert_eq!(targets, vec!["/en/", "/zh/"], "{uri}");

            for target in targets {
                let response = get(app(), &target).await;
                assert_eq!(response.status(), StatusCode::OK, "{uri} -> {target}");
            }
        }
    }

    #[tokio::test]
    async fn test_switcher_targets_keep_query() {
        let html = body_text(get(app(), "/en/jobs?ref=nav").await).await;
        assert_eq!(
            option_values(&html),
            vec!["/en/jobs?ref=nav", "/zh/jobs?ref=nav"]
        );
    }

    #[tokio::test]
    async fn test_unlocalized_page_with_trailing_slash_redirects() {
        let response = get(app(), "/resume/").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/en/resume");

        let response = get(app(), "/en/resume").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unlocalized_page_redirects_under_default() {
        let response = get(app(), "/jobs?ref=nav").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/en/jobs?ref=nav");
    }

    #[tokio::test]
    async fn test_unknown_page_is_not_found() {
        for uri in ["/en/overview", "/en/resume/extra"] {
            let response = get(app(), uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
            assert_eq!(body["error"]["code"], "NOT_FOUND");
        }
    }

    #[tokio::test]
    async fn test_missing_bundle_fails_only_that_render() {
        let loader = StaticBundleLoader::from_sources([(
            "en",
            r#"{"UploadResume": {"title": "Upload your resume"}}"#,
        )])
        .unwrap();
        let app = build_router(state_with(loader));

        let response = get(app.clone(), "/zh/resume").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "BUNDLE_LOAD_ERROR");

        let response = get(app, "/en/resume").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Upload your resume"));
    }
}
