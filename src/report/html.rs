use super::data::RunData;
use anyhow::Context;
use chrono::{DateTime, Utc};
use tera::{Context as TeraContext, Tera};

const BUILTIN_TEMPLATE: &str = include_str!("./assets/templates/index.html");
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub(super) fn render_report(
    runs: &[RunData],
    reference_time: DateTime<Utc>,
    custom_template: Option<&str>,
    title: &str,
) -> anyhow::Result<String> {
    let mut tera = Tera::default();
    match custom_template {
        Some(template) => tera
            .add_raw_template("template.html", template)
            .context("failed to parse HTML template")?,
        None => tera
            .add_raw_template("template.html", BUILTIN_TEMPLATE)
            .context("failed to parse built-in HTML template")?,
    }

    let mut tera_ctx = TeraContext::new();
    tera_ctx.insert("title", title);
    tera_ctx.insert(
        "timestamp",
        &reference_time.format(TIMESTAMP_FORMAT).to_string(),
    );
    tera_ctx.insert("runs", runs);

    let page_contents = tera
        .render("template.html", &tera_ctx)
        .context("failed to render HTML template")?;

    Ok(page_contents)
}
