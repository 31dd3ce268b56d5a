//! Onboarding pages: resume upload and job descriptions.
//!
//! The upload widgets are inert markup; submitting them is handled elsewhere.

use crate::pages::{escape, Page, RenderContext};

/// Returns `(title, body)`.
pub fn render_resume(ctx: &RenderContext<'_>) -> (String, String) {
    let t = ctx.bundle.translator("UploadResume");
    let title = t.t("title").into_owned();
    let body = format!(
        "<section class=\"resume-upload\">\n<h1>{title}</h1>\n<p>{description}</p>\n<label for=\"resume-file\">{upload_label}</label>\n<input id=\"resume-file\" type=\"file\" accept=\".pdf,.docx\">\n<a href=\"{next}\" class=\"next\">{next_label}</a>\n</section>",
        title = escape(&title),
        description = escape(&t.t("description")),
        upload_label = escape(&t.t("uploadLabel")),
        next = ctx.href(Page::Jobs),
        next_label = escape(&t.t("next")),
    );
    (title, body)
}

pub fn render_jobs(ctx: &RenderContext<'_>) -> (String, String) {
    let t = ctx.bundle.translator("ProvideJobDescriptionsPage");
    let field = ctx.bundle.translator("Comp71");
    let title = t.t("title").into_owned();
    let body = format!(
        "<section class=\"job-descriptions\">\n<h1>{title}</h1>\n<p>{description}</p>\n<div class=\"field\">\n<label for=\"job-description\">{label}</label>\n<textarea id=\"job-description\"></textarea>\n</div>\n<p class=\"loading\" hidden>{loading}</p>\n</section>",
        title = escape(&title),
        description = escape(&t.t("description")),
        label = escape(&field.t("label")),
        loading = escape(&t.t("loadingText")),
    );
    (title, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageBundle;
    use crate::locale::SupportedLocales;

    #[test]
    fn test_jobs_page_uses_both_namespaces() {
        let supported = SupportedLocales::new(["en"]).unwrap();
        let bundle = MessageBundle::from_json(
            supported.get("en").unwrap(),
            r#"{"ProvideJobDescriptionsPage": {"title": "Provide <JDs>", "description": "Paste", "loadingText": "Loading"}, "Comp71": {"label": "JD"}}"#,
        )
        .unwrap();
        let ctx = RenderContext {
            bundle: &bundle,
            current_path: "/en/jobs",
            supported: &supported,
        };

        let (title, body) = render_jobs(&ctx);
        assert_eq!(title, "Provide <JDs>");
        assert!(body.contains("<h1>Provide &lt;JDs&gt;</h1>"));
        assert!(body.contains(">JD</label>"));
        assert!(body.contains("<p class=\"loading\" hidden>Loading</p>"));
    }

    #[test]
    fn test_resume_page_links_to_jobs_in_same_locale() {
        let supported = SupportedLocales::new(["en", "zh"]).unwrap();
        let bundle = MessageBundle::from_json(supported.get("zh").unwrap(), "{}").unwrap();
        let ctx = RenderContext {
            bundle: &bundle,
            current_path: "/zh/resume",
            supported: &supported,
        };

        let (title, body) = render_resume(&ctx);
        assert_eq!(title, "UploadResume.title");
        assert!(body.contains("href=\"/zh/jobs\""));
    }
}
