//! Markdown to HTML rendering for model responses

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Render model output as HTML
///
/// Tables and strikethrough are enabled. Raw HTML in the input is emitted
/// as escaped text, and link or image destinations with a scheme other than
/// http, https or mailto are dropped, so model output cannot inject script.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(tag) => Event::Start(neutralize(tag)),
        Event::End(tag) => Event::End(neutralize(tag)),
        other => other,
    });

    let mut rendered = String::with_capacity(source.len() * 2);
    html::push_html(&mut rendered, parser);
    rendered
}

fn neutralize(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link(kind, dest, title) if !is_safe_destination(&dest) => {
            Tag::Link(kind, CowStr::Borrowed("#"), title)
        }
        Tag::Image(kind, dest, title) if !is_safe_destination(&dest) => {
            Tag::Image(kind, CowStr::Borrowed(""), title)
        }
        other => other,
    }
}

/// Relative destinations and http, https or mailto URLs
fn is_safe_destination(dest: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme.
    let compact: String = dest
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();

    match compact.find([':', '/', '?', '#']) {
        Some(i) if compact[i..].starts_with(':') => matches!(
            compact[..i].to_ascii_lowercase().as_str(),
            "http" | "https" | "mailto"
        ),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mom_domain::MOM_TABLE_HEADER;

    #[test]
    fn test_renders_mom_table() {
        let source = format!(
            "{}\n|---|---|---|---|\n| Send invoice | 12 Mar | ✅ Completed | 100% |\n",
            MOM_TABLE_HEADER
        );
        let html = render_markdown(&source);

        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Particulars (To-Dos)</th>"));
        assert!(html.contains("<td>Send invoice</td>"));
        assert!(html.contains("✅ Completed"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n\nhello <b>there</b>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_script_links_in_table_are_neutralized() {
        let html = render_markdown(
            "| Particulars (To-Dos) |\n|---|\n| [Open deck](javascript:alert(document.cookie)) |\n",
        );

        assert!(html.contains("<td><a href=\"#\">Open deck</a></td>"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_script_schemes_are_dropped_regardless_of_case_or_form() {
        let html = render_markdown(
            "[a](JavaScript:alert(1)) [b](vbscript:msgbox) <javascript:alert(2)> ![c](data:text/html;base64,PHNjcmlwdD4=)",
        )
        .to_ascii_lowercase();

        assert!(!html.contains("href=\"javascript:"));
        assert!(!html.contains("href=\"vbscript:"));
        assert!(!html.contains("src=\"data:"));
    }

    #[test]
    fn test_safe_links_are_kept() {
        let html = render_markdown(
            "[deck](https://example.com/deck) [mail](mailto:pm@example.com) [notes](#notes) [doc](docs/plan.md)",
        );

        assert!(html.contains("href=\"https://example.com/deck\""));
        assert!(html.contains("href=\"mailto:pm@example.com\""));
        assert!(html.contains("href=\"#notes\""));
        assert!(html.contains("href=\"docs/plan.md\""));
    }

    #[test]
    fn test_plain_text_becomes_paragraph() {
        assert_eq!(render_markdown("No tasks found."), "<p>No tasks found.</p>\n");
    }
}
