//! HTML to Markdown for problem descriptions.

use htmd::HtmlToMarkdown;

/// Best-effort conversion. Scripts and styles are dropped; if the converter
/// gives up, the markup is returned unchanged so the README still has a body.
pub fn convert(html: &str) -> String {
    let converter = HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style"])
        .build();

    match converter.convert(html) {
        Ok(md) => md.trim().to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "markdown conversion failed, keeping markup");
            html.trim().to_string()
        }
    }
}
