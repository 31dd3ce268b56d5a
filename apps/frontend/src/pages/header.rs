//! Site header: logo, onboarding navigation and the language switcher.

use crate::locale::switched_path;
use crate::pages::{escape, Page, RenderContext};

pub fn render(ctx: &RenderContext<'_>) -> String {
    let t = ctx.bundle.translator("Header");
    format!(
        "<header>\n<a href=\"{home}\" class=\"logo\">{logo}</a>\n<nav>\n<a href=\"{resume}\">{resume_label}</a>\n<a href=\"{jobs}\">{jobs_label}</a>\n{switcher}\n</nav>\n</header>",
        home = ctx.href(Page::Home),
        logo = escape(&t.t("logo")),
        resume = ctx.href(Page::Resume),
        resume_label = escape(&t.t("resume")),
        jobs = ctx.href(Page::Jobs),
        jobs_label = escape(&t.t("jobs")),
        switcher = language_switcher(ctx, &t.t("languageLabel")),
    )
}

/// A `<select>` whose option values are the switch targets for the current
/// path. Choosing one replaces the current history entry.
fn language_switcher(ctx: &RenderContext<'_>, label: &str) -> String {
    let current = ctx.bundle.locale();
    let options: String = ctx
        .supported
        .iter()
        .map(|locale| {
            let target = switched_path(ctx.current_path, locale.as_str());
            let selected = if &locale == current { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{selected}>{}</option>\n",
                escape(&target),
                escape(display_name(locale.as_str())),
            )
        })
        .collect();

    format!(
        "<select class=\"language-switcher\" aria-label=\"{}\" onchange=\"window.location.replace(this.value)\">\n{options}</select>",
        escape(label)
    )
}

/// Each language is named in itself, independent of the page locale.
fn display_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "zh" => "中文",
        other => other,
    }
}
