use std::path::Path;

use jiff::{Zoned, civil::Date};

use quadra_core::{Coefficients, Solution, fixed, format_equation};

use crate::{Document, ReportConfig, Style, TextDocument};

/// Printed in place of the explanation section when there is none.
pub const NO_EXPLANATION: &str = "(No AI explanation was generated for this report)";

/// A report of one solved equation.
///
/// The layout is:
///
/// 1. title and date
/// 2. the formatted equation
/// 3. type, discriminant, vertex, and solutions
/// 4. the explanation, if any, with Markdown bold markers removed
#[derive(Debug, Clone)]
pub struct Report {
    coeffs: Coefficients,
    solution: Solution,
    explanation: Option<String>,
    title: String,
    date: Date,
}

impl Report {
    /// Creates a report dated today, with the default title and no explanation.
    #[must_use]
    pub fn new(coeffs: Coefficients, solution: Solution) -> Self {
        Self {
            coeffs,
            solution,
            explanation: None,
            title: ReportConfig::default().title,
            date: Zoned::now().date(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the date printed under the title.
    #[must_use]
    pub fn date(mut self, date: Date) -> Self {
        self.date = date;
        self
    }

    /// Attaches explanation text. Blank text counts as no explanation.
    #[must_use]
    pub fn explanation(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.explanation = (!text.trim().is_empty()).then_some(text);
        self
    }

    /// Writes the report into a document.
    pub fn write<D: Document>(&self, doc: &mut D) {
        let Solution {
            kind,
            discriminant,
            roots,
            vertex,
        } = self.solution;

        doc.add_line(&self.title, Style::Title);
        doc.add_line(&format!("Date: {}", self.date), Style::Body);

        doc.add_line("1. Equation", Style::Heading);
        doc.add_line(&format_equation(&self.coeffs), Style::Monospace);

        doc.add_line("2. Results", Style::Heading);
        doc.add_line(&format!("Type: {}", kind.as_str().to_uppercase()), Style::Body);
        doc.add_line(&format!("Discriminant: {discriminant}"), Style::Body);
        doc.add_line(
            &format!("Vertex: ({}, {})", fixed(vertex.x, 2), fixed(vertex.y, 2)),
            Style::Body,
        );
        doc.add_line(&format!("Solutions: {}", roots.summary()), Style::Body);
        if self.solution.is_degenerate() {
            doc.add_line(
                "(a = 0 and b = 0: the equation has no solution or infinitely many)",
                Style::Muted,
            );
        }

        match &self.explanation {
            Some(text) => {
                doc.add_line("3. Step-by-step explanation", Style::Heading);
                doc.add_text(&text.replace("**", ""), Style::Body);
            }
            None => doc.add_line(NO_EXPLANATION, Style::Muted),
        }
    }

    /// Writes the report into `doc` and saves it to `path`.
    ///
    /// # Errors
    ///
    /// Returns the document's error if saving fails.
    pub fn export<D: Document>(&self, mut doc: D, path: &Path) -> Result<(), D::Error> {
        self.write(&mut doc);
        doc.save(path)?;
        tracing::info!(path = %path.display(), equation = %self.coeffs, "exported report");
        Ok(())
    }

    /// Exports as plain text using the config's title, layout, and path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export_text(self, config: &ReportConfig) -> Result<(), crate::ReportError> {
        let doc = TextDocument::new(config.width, config.lines_per_page);
        self.title(config.title.clone()).export(doc, &config.path)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use jiff::civil::date;
    use quadra_core::solve;

    use super::*;

    /// Records every call so tests can assert on the layout directly.
    #[derive(Default)]
    struct Recorder {
        entries: Vec<(String, Style)>,
    }

    impl Recorder {
        fn texts(&self) -> Vec<&str> {
            self.entries.iter().map(|(text, _)| text.as_str()).collect()
        }
    }

    impl Document for Recorder {
        type Error = Infallible;

        fn add_text(&mut self, text: &str, style: Style) {
            self.entries.push((format!("text:{text}"), style));
        }

        fn add_line(&mut self, line: &str, style: Style) {
            self.entries.push((line.to_owned(), style));
        }

        fn save(&self, _path: &Path) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn report(a: f64, b: f64, c: f64) -> Report {
        let coeffs = Coefficients::new(a, b, c);
        Report::new(coeffs, solve(&coeffs)).date(date(2026, 10, 14))
    }

    #[test]
    fn lays_out_all_sections() {
        let mut doc = Recorder::default();
        report(2.0, -4.0, -7.0).write(&mut doc);

        assert_eq!(
            doc.texts(),
            [
                "Quadra Report",
                "Date: 2026-10-14",
                "1. Equation",
                "2x² - 4x - 7 = 0",
                "2. Results",
                "Type: COMPLETE",
                "Discriminant: 72",
                "Vertex: (1.00, -9.00)",
                "Solutions: x1 = 3.12, x2 = -1.12",
                NO_EXPLANATION,
            ]
        );
        assert_eq!(doc.entries[0].1, Style::Title);
        assert_eq!(doc.entries[3].1, Style::Monospace);
        assert_eq!(doc.entries[9].1, Style::Muted);
    }

    #[test]
    fn explanation_has_bold_markers_removed() {
        let mut doc = Recorder::default();
        report(1.0, 0.0, -9.0)
            .explanation("**Step 1:** isolate x²")
            .write(&mut doc);

        let texts = doc.texts();
        assert!(texts.contains(&"Type: INCOMPLETE-B"));
        assert_eq!(texts[texts.len() - 2], "3. Step-by-step explanation");
        assert_eq!(texts[texts.len() - 1], "text:Step 1: isolate x²");
    }

    #[test]
    fn vertex_ties_round_away_from_zero() {
        let mut doc = Recorder::default();
        report(4.0, -1.0, 0.0).write(&mut doc);

        assert!(doc.texts().contains(&"Vertex: (0.13, -0.06)"));
    }

    #[test]
    fn blank_explanation_counts_as_missing() {
        let mut doc = Recorder::default();
        report(1.0, -2.0, 1.0).explanation("   ").write(&mut doc);

        let texts = doc.texts();
        assert!(texts.contains(&"Solutions: x = 1.00 (double)"));
        assert_eq!(texts.last(), Some(&NO_EXPLANATION));
    }

    #[test]
    fn degenerate_equation_is_flagged() {
        let mut doc = Recorder::default();
        report(0.0, 0.0, 3.0).write(&mut doc);

        let texts = doc.texts();
        assert!(texts.contains(&"Type: LINEAR"));
        assert!(texts.contains(&"Solutions: x = -Infinity"));
        assert!(texts.iter().any(|t| t.starts_with("(a = 0 and b = 0")));
    }

    #[test]
    fn export_text_writes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = ReportConfig {
            title: "Homework".to_owned(),
            path: dir.path().join("report.txt"),
            ..ReportConfig::default()
        };

        report(1.0, -5.0, 6.0)
            .explanation("Factor it.")
            .export_text(&config)
            .expect("exports");

        let text = std::fs::read_to_string(&config.path).expect("reads");
        assert!(text.starts_with("Homework\n========\n"));
        assert!(text.contains("    x² - 5x + 6 = 0\n"));
        assert!(text.contains("Solutions: x1 = 3.00, x2 = 2.00\n"));
        assert!(text.ends_with("Factor it.\n"));
    }
}
