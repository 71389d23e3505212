use std::path::Path;

use crate::{Document, ReportError, Style};

use super::wrap;

const INDENT: &str = "    ";

/// Separates pages in the rendered output.
const PAGE_BREAK: char = '\u{c}';

/// A paginated plain-text [`Document`].
///
/// Text is wrapped to `width` characters and pages hold at most
/// `lines_per_page` lines. Rendered pages are separated by a form feed.
#[derive(Debug, Clone)]
pub struct TextDocument {
    width: usize,
    lines_per_page: usize,
    pages: Vec<Vec<String>>,
}

impl TextDocument {
    /// Creates an empty document.
    ///
    /// Zero dimensions are raised to one.
    #[must_use]
    pub fn new(width: usize, lines_per_page: usize) -> Self {
        Self {
            width: width.max(1),
            lines_per_page: lines_per_page.max(1),
            pages: vec![Vec::new()],
        }
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the lines of each page.
    #[must_use]
    pub fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    /// Renders all pages into a single string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push(PAGE_BREAK);
                out.push('\n');
            }
            for line in page {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    fn push(&mut self, line: String) {
        let needs_page = self
            .pages
            .last()
            .is_none_or(|page| page.len() >= self.lines_per_page);
        if needs_page {
            self.pages.push(Vec::new());
        }
        if let Some(page) = self.pages.last_mut() {
            page.push(line);
        }
    }

    fn is_empty(&self) -> bool {
        self.pages.iter().all(Vec::is_empty)
    }

    fn push_styled(&mut self, line: &str, style: Style) {
        match style {
            Style::Title | Style::Heading => {
                if style == Style::Heading && !self.is_empty() {
                    self.push(String::new());
                }
                let rule = if style == Style::Title { "=" } else { "-" };
                self.push(line.to_owned());
                self.push(rule.repeat(line.chars().count()));
            }
            Style::Monospace => self.push(format!("{INDENT}{line}")),
            Style::Body | Style::Muted => self.push(line.to_owned()),
        }
    }
}

impl Document for TextDocument {
    type Error = ReportError;

    fn add_text(&mut self, text: &str, style: Style) {
        let width = match style {
            Style::Monospace => self.width.saturating_sub(INDENT.len()),
            _ => self.width,
        };
        for line in wrap(text, width) {
            self.push_styled(&line, style);
        }
    }

    fn add_line(&mut self, line: &str, style: Style) {
        self.push_styled(line, style);
    }

    fn save(&self, path: &Path) -> Result<(), Self::Error> {
        std::fs::write(path, self.render()).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), pages = self.page_count(), "saved text report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_are_rendered() {
        let mut doc = TextDocument::new(40, 100);
        doc.add_line("Report", Style::Title);
        doc.add_line("1. Equation", Style::Heading);
        doc.add_line("x² = 0", Style::Monospace);
        doc.add_line("(none)", Style::Muted);

        assert_eq!(
            doc.render(),
            "Report\n======\n\n1. Equation\n-----------\n    x² = 0\n(none)\n"
        );
    }

    #[test]
    fn heading_first_has_no_leading_blank() {
        let mut doc = TextDocument::new(40, 100);
        doc.add_line("Results", Style::Heading);
        assert_eq!(doc.pages()[0], ["Results", "-------"]);
    }

    #[test]
    fn add_text_wraps_to_width() {
        let mut doc = TextDocument::new(10, 100);
        doc.add_text("one two three four", Style::Body);
        assert_eq!(doc.pages()[0], ["one two", "three four"]);
    }

    #[test]
    fn add_line_does_not_wrap() {
        let mut doc = TextDocument::new(5, 100);
        doc.add_line("a line longer than five", Style::Body);
        assert_eq!(doc.pages()[0], ["a line longer than five"]);
    }

    #[test]
    fn paginates_when_page_is_full() {
        let mut doc = TextDocument::new(40, 2);
        for line in ["a", "b", "c", "d", "e"] {
            doc.add_line(line, Style::Body);
        }

        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.render(), "a\nb\n\u{c}\nc\nd\n\u{c}\ne\n");
    }

    #[test]
    fn save_writes_rendered_text() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("report.txt");

        let mut doc = TextDocument::new(40, 10);
        doc.add_line("hello", Style::Body);
        doc.save(&path).expect("saves");

        assert_eq!(std::fs::read_to_string(&path).expect("reads"), "hello\n");
    }

    #[test]
    fn save_reports_the_failing_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("report.txt");

        let err = TextDocument::new(40, 10).save(&path).expect_err("parent is missing");
        assert!(matches!(err, ReportError::Io { path: p, .. } if p == path));
    }
}
