//! Indented word wrapping for help paragraphs

use std::env;

use super::formatter::TextFormatter;

/// Terminal width used when `COLUMNS` is unset or unparsable
pub const DEFAULT_COLUMNS: usize = 80;

/// Narrowest text column ever produced, whatever the indent
pub const MIN_TEXT_WIDTH: usize = 11;

/// Greedy word wrap in the manner of Python's `textwrap.fill`.
///
/// Tabs are expanded and every other whitespace character becomes a space,
/// but runs of spaces between words are kept. Whitespace where a line breaks
/// is dropped. Every line is prefixed with `indent` spaces and lines (indent
/// included) are at most `max(width - indent, 11)` columns. Words longer than
/// a line are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentedWrap {
    width: usize,
    indent: usize,
}

const TAB_SIZE: usize = 8;

impl IndentedWrap {
    pub fn new(width: usize) -> Self {
        Self { width, indent: 0 }
    }

    /// Width from the `COLUMNS` environment variable, less a two column margin
    pub fn from_env() -> Self {
        let columns = env::var("COLUMNS")
            .ok()
            .and_then(|c| c.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_COLUMNS);
        Self::new(columns.saturating_sub(2))
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Line width including the indent
    pub fn text_width(&self) -> usize {
        self.width.saturating_sub(self.indent).max(MIN_TEXT_WIDTH)
    }

    fn fill(&self, text: &str) -> String {
        let prefix = " ".repeat(self.indent);
        let room = self.text_width().saturating_sub(self.indent).max(1);

        let mut pending = chunks(text);
        pending.reverse();

        let mut lines: Vec<String> = Vec::new();
        while !pending.is_empty() {
            if !lines.is_empty() && pending.last().map_or(false, |c| is_blank(c)) {
                pending.pop();
            }

            let mut line: Vec<char> = Vec::new();
            while let Some(len) = pending.last().map(Vec::len) {
                if line.len() + len > room {
                    break;
                }
                if let Some(chunk) = pending.pop() {
                    line.extend(chunk);
                }
            }

            // A chunk wider than a whole line fills what is left of this one
            if let Some(chunk) = pending.last_mut() {
                if chunk.len() > room {
                    let rest = chunk.split_off(room.saturating_sub(line.len()));
                    line.extend(std::mem::replace(chunk, rest));
                }
            }

            while line.last() == Some(&' ') {
                line.pop();
            }
            if !line.is_empty() {
                lines.push(format!("{}{}", prefix, line.into_iter().collect::<String>()));
            }
        }

        lines.join("\n")
    }
}

/// Whitespace as the wrapper sees it (ASCII only)
fn is_wrap_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

fn is_blank(chunk: &[char]) -> bool {
    chunk.iter().all(|&c| c == ' ')
}

fn push_char(chunks: &mut Vec<Vec<char>>, c: char) {
    match chunks.last_mut() {
        Some(chunk) if (chunk[0] == ' ') == (c == ' ') => chunk.push(c),
        _ => chunks.push(vec![c]),
    }
}

/// Splits text into alternating runs of spaces and of everything else, after
/// expanding tabs and turning other whitespace into single spaces.
fn chunks(text: &str) -> Vec<Vec<char>> {
    let mut chunks: Vec<Vec<char>> = Vec::new();
    let mut column = 0;

    for c in text.chars() {
        match c {
            '\t' => {
                let spaces = TAB_SIZE - column % TAB_SIZE;
                for _ in 0..spaces {
                    push_char(&mut chunks, ' ');
                }
                column += spaces;
            }
            '\n' | '\r' => {
                push_char(&mut chunks, ' ');
                column = 0;
            }
            c if is_wrap_space(c) => {
                push_char(&mut chunks, ' ');
                column += 1;
            }
            c => {
                push_char(&mut chunks, c);
                column += 1;
            }
        }
    }
    chunks
}

impl Default for IndentedWrap {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS - 2)
    }
}

impl TextFormatter for IndentedWrap {
    fn format_text(&self, text: &str) -> String {
        self.fill(text)
    }
}
