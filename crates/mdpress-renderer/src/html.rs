//! HTML backend for markdown rendering.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::state::escape_html;

/// HTML render backend.
///
/// Plain code blocks become `<pre><code>` with no language class, so no
/// client-side highlighter picks them up.
///
/// Code block text is always HTML-escaped: a block containing `<b>` is
/// written as `&lt;b&gt;` and shows up literally in the page. Math fences
/// that fail to typeset keep the same escaping but lose the wrapper.
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn code_block(content: &str, out: &mut String) {
        write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }
}
