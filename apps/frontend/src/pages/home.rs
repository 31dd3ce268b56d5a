use crate::pages::{escape, Page, RenderContext};

/// Landing page. Returns `(title, body)`.
pub fn render(ctx: &RenderContext<'_>) -> (String, String) {
    let t = ctx.bundle.translator("Home");
    let title = t.t("title").into_owned();
    let body = format!(
        "<section class=\"home\">\n<h1>{title}</h1>\n<p>{description}</p>\n<a href=\"{start}\" class=\"cta\">{get_started}</a>\n</section>",
        title = escape(&title),
        description = escape(&t.t("description")),
        start = ctx.href(Page::Resume),
        get_started = escape(&t.t("getStarted")),
    );
    (title, body)
}
