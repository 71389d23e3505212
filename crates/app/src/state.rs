use quadra_core::{Coefficients, GraphPoint, Solution, sample, solve};
use quadra_report::Report;

/// Identifies one explanation request.
///
/// A ticket only matches the state that issued it, so answers that arrive
/// after the coefficients changed are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticket {
    generation: u64,
    pub coefficients: Coefficients,
}

/// Everything the viewer displays, derived from the current coefficients.
///
/// The solution and samples are recomputed on every change; nothing is kept
/// from previous coefficients.
#[derive(Debug, Clone)]
pub struct AppState {
    coefficients: Coefficients,
    solution: Solution,
    points: Vec<GraphPoint>,
    explanation: Option<String>,
    pending: Option<Ticket>,
    generation: u64,
    status: Option<String>,
}

impl AppState {
    /// Creates the state for the given coefficients.
    #[must_use]
    pub fn new(coefficients: Coefficients) -> Self {
        Self {
            coefficients,
            solution: solve(&coefficients),
            points: sample(&coefficients),
            explanation: None,
            pending: None,
            generation: 0,
            status: None,
        }
    }

    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    #[must_use]
    pub fn points(&self) -> &[GraphPoint] {
        &self.points
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns `true` while an explanation request is in flight.
    #[must_use]
    pub fn is_explaining(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces the coefficients and recomputes everything derived from them.
    ///
    /// Clears the explanation and abandons any pending request. Returns
    /// `false` if the coefficients are unchanged.
    pub fn set_coefficients(&mut self, coefficients: Coefficients) -> bool {
        if coefficients == self.coefficients {
            return false;
        }

        self.coefficients = coefficients;
        self.solution = solve(&coefficients);
        self.points = sample(&coefficients);
        self.explanation = None;
        self.pending = None;
        self.status = None;
        self.generation += 1;
        true
    }

    /// Returns `true` if an explanation may be requested.
    ///
    /// Linear equations are not explained, and only one request runs at a time.
    #[must_use]
    pub fn can_explain(&self) -> bool {
        self.pending.is_none() && !self.coefficients.is_linear()
    }

    /// Marks an explanation request as started.
    ///
    /// Returns `None` if [`can_explain`](Self::can_explain) is `false`.
    pub fn begin_explain(&mut self) -> Option<Ticket> {
        if !self.can_explain() {
            return None;
        }

        let ticket = Ticket {
            generation: self.generation,
            coefficients: self.coefficients,
        };
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Accepts the answer to a request.
    ///
    /// Returns `false` and drops the text if the ticket is stale.
    pub fn finish_explain(&mut self, ticket: Ticket, text: String) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!(generation = ticket.generation, "discarding stale explanation");
            return false;
        }

        self.pending = None;
        self.explanation = Some(text);
        true
    }

    /// Sets the one-line status message.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Builds a report of the current equation and explanation.
    #[must_use]
    pub fn report(&self) -> Report {
        let report = Report::new(self.coefficients, self.solution);
        match &self.explanation {
            Some(text) => report.explanation(text.clone()),
            None => report,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(quadra_core::presets::DEFAULT)
    }
}
