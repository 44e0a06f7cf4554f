// crates/termfolio-core/src/html.rs - HTML fragment helpers
//
// The display surface is an HTML page styled with the terminal theme classes
// (`text-terminal-*`). Everything the handlers emit goes through these helpers
// so user-typed text is always escaped.

use crate::output::{CommandError, Output};

/// Escape text for safe inclusion in HTML element content or attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Neutral message block
pub fn text_block(text: &str) -> String {
    format!(r#"<div class="text-terminal-muted">{}</div>"#, escape(text))
}

/// Error message block
pub fn error_block(text: &str) -> String {
    format!(r#"<div class="text-terminal-red">{}</div>"#, escape(text))
}

/// Section heading used by listing-style commands
pub fn heading(text: &str) -> String {
    format!(
        r#"<h2 class="text-terminal-accent text-xl mb-4">{}</h2>"#,
        escape(text)
    )
}

/// Render a command result as the fragment the display surface inserts
///
/// Intents (navigation, opening a URL) render as their message; the caller is
/// still responsible for acting on them. `Clear` renders as nothing.
pub fn render(result: &Result<Output, CommandError>) -> String {
    match result {
        Ok(Output::Html { html }) => html.clone(),
        Ok(Output::Text { text }) => text_block(text),
        Ok(Output::Navigate { message, .. }) | Ok(Output::OpenUrl { message, .. }) => {
            text_block(message)
        }
        Ok(Output::Clear) => String::new(),
        Err(err) => error_block(&err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b a="1">'x' & y</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&#39;x&#39; &amp; y&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_render_styles() {
        assert_eq!(
            render(&Ok(Output::text("hi <there>"))),
            r#"<div class="text-terminal-muted">hi &lt;there&gt;</div>"#
        );
        assert_eq!(
            render(&Err(CommandError::DocumentNotFound("x.md".into()))),
            r#"<div class="text-terminal-red">File &#39;x.md&#39; not found.</div>"#
        );
        assert_eq!(render(&Ok(Output::Clear)), "");
        assert_eq!(render(&Ok(Output::html("<p>raw</p>"))), "<p>raw</p>");
    }
}
