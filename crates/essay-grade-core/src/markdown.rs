//! Markdown processing utilities.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. This handles edge cases (nested code blocks, HTML entities,
//! reference links) that regex approaches miss.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning the essay's prose.
///
/// Removes:
/// - Code blocks (fenced and indented)
/// - Inline code
/// - HTML tags
/// - YAML frontmatter
/// - Image alt text
///
/// Preserves:
/// - Headings, each on its own line (an essay's title is prose)
/// - Link text (the visible part)
/// - Blockquote and list item text
/// - Emphasis/strong text (without markers)
/// - Paragraph breaks, as newlines
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    // Handle YAML frontmatter before parsing (pulldown-cmark doesn't know about it)
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut code_depth: usize = 0;
    let mut image_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_)) => code_depth += 1,
            Event::End(TagEnd::CodeBlock) => code_depth = code_depth.saturating_sub(1),
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),

            Event::Text(t) if code_depth == 0 && image_depth == 0 => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak if code_depth == 0 => result.push(' '),

            Event::End(TagEnd::Heading(_) | TagEnd::Paragraph | TagEnd::Item)
                if code_depth == 0 =>
            {
                result.push('\n');
            }

            _ => {}
        }
    }

    result
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };

    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
