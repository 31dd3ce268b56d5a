// Server-rendered pages for the onboarding flow.
// Every page renders from a resolved locale + its message bundle; no page reads locale state on its own.

pub mod header;
pub mod home;
pub mod onboarding;

use crate::i18n::MessageBundle;
use crate::locale::SupportedLocales;

/// Routable pages, addressed as `/{locale}/{slug}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Resume,
    Jobs,
}

impl Page {
    pub fn from_slug(slug: &str) -> Option<Page> {
        match slug {
            "" => Some(Page::Home),
            "resume" => Some(Page::Resume),
            "jobs" => Some(Page::Jobs),
            _ => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Resume => "resume",
            Page::Jobs => "jobs",
        }
    }
}

/// Everything a page needs to render one response.
pub struct RenderContext<'a> {
    pub bundle: &'a MessageBundle,
    /// Request path, used to compute language switch targets.
    pub current_path: &'a str,
    pub supported: &'a SupportedLocales,
}

impl RenderContext<'_> {
    /// Locale-prefixed link to `page`.
    pub fn href(&self, page: Page) -> String {
        format!("/{}/{}", self.bundle.locale(), page.slug())
    }
}

pub fn render(page: Page, ctx: &RenderContext<'_>) -> String {
    let (title, body) = match page {
        Page::Home => home::render(ctx),
        Page::Resume => onboarding::render_resume(ctx),
        Page::Jobs => onboarding::render_jobs(ctx),
    };
    document(ctx, &title, &body)
}

fn document(ctx: &RenderContext<'_>, title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{header}\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        lang = escape(ctx.bundle.locale().as_str()),
        title = escape(title),
        header = header::render(ctx),
    )
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
