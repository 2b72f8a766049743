//! Paragraph-preserving help text formatting

/// Turns raw help text into printed help text
pub trait TextFormatter {
    fn format_text(&self, text: &str) -> String;
}

/// Adapts a plain function or closure into a `TextFormatter`
#[derive(Debug, Clone, Copy)]
pub struct FnFormatter<F>(pub F);

impl<F> TextFormatter for FnFormatter<F>
where
    F: Fn(&str) -> String,
{
    fn format_text(&self, text: &str) -> String {
        (self.0)(text)
    }
}

/// Wraps `f` as a formatter
pub fn from_fn<F>(f: F) -> FnFormatter<F>
where
    F: Fn(&str) -> String,
{
    FnFormatter(f)
}

/// Preserves paragraphs and bulleted lists that start with whitespace.
///
/// Text is split on blank lines (`"\n\n"`). A paragraph that is empty or
/// whose first character is whitespace is kept verbatim; every other
/// paragraph goes through the base formatter. Paragraphs are rejoined with
/// a blank line.
#[derive(Debug, Clone)]
pub struct NewlinePreservingFormatter<B> {
    base: B,
}

impl<B: TextFormatter> NewlinePreservingFormatter<B> {
    pub fn new(base: B) -> Self {
        Self { base }
    }
}

/// Unicode whitespace plus the ASCII information separators U+001C to U+001F
fn starts_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl<B: TextFormatter> TextFormatter for NewlinePreservingFormatter<B> {
    fn format_text(&self, text: &str) -> String {
        text.split("\n\n")
            .map(|paragraph| match paragraph.chars().next() {
                None => String::new(),
                Some(c) if starts_blank(c) => paragraph.to_string(),
                Some(_) => self.base.format_text(paragraph),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
