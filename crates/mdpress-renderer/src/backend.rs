//! Render backend trait for format-specific rendering.
//!
//! The generic renderer handles structure (paragraphs, lists, tables, inline
//! formatting) and delegates the few elements whose markup is a matter of
//! output format to a [`RenderBackend`].

/// Backend trait for format-specific rendering operations.
///
/// Implementations provide rendering for:
/// - Code blocks that no [`CodeBlockProcessor`](crate::CodeBlockProcessor) claimed
/// - Blockquotes
/// - Images
/// - Breaks, rules and task list markers (with HTML defaults)
pub trait RenderBackend {
    /// Render a plain code block.
    ///
    /// `content` is the raw block source; implementations must escape it.
    fn code_block(content: &str, out: &mut String);

    /// Render blockquote start tag.
    fn blockquote_start(out: &mut String);

    /// Render blockquote end tag.
    fn blockquote_end(out: &mut String);

    /// Render an image.
    ///
    /// # Arguments
    ///
    /// * `src` - Image source URL
    /// * `alt` - Alt text for the image
    /// * `title` - Title attribute, empty when absent
    /// * `out` - Output buffer to write to
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Render a hard break.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a task list marker.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
