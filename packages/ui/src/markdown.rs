//! Markdown rendering for AI answers.

use pulldown_cmark::{Event, Options, Parser};

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts
}

/// Render GitHub-flavored markdown to HTML. Raw HTML in the source is shown
/// as text, never injected.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_out = String::new();
    pulldown_cmark::html::push_html(&mut html_out, parser);
    html_out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_render() {
        let html = render_markdown("| Produto | Qtd |\n|---|---|\n| Leite | 3 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Leite</td>"));
    }

    #[test]
    fn test_bold_and_lists() {
        let html = render_markdown("**Total:** 5\n\n- um\n- dois\n");
        assert!(html.contains("<strong>Total:</strong>"));
        assert!(html.contains("<li>um</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
