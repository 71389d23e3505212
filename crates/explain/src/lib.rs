//! Step-by-step explanations of quadratic equations.
//!
//! An [`Explainer`] turns [`Coefficients`] into free-form explanation text.
//! Callers that only want something to display use [`explain_or_fallback`],
//! which never fails: errors and empty answers become fixed messages.
//!
//! # Features
//!
//! - `gemini` (default) — Enables [`GeminiExplainer`], which calls the Google
//!   Gemini `generateContent` endpoint. This feature adds a dependency on
//!   `reqwest`.

mod config;
mod error;
mod prompt;

#[cfg(feature = "gemini")]
mod gemini;

pub use config::{ConfigError, ExplainConfig};
pub use error::ExplainError;
pub use prompt::{SYSTEM_INSTRUCTION, prompt};

#[cfg(feature = "gemini")]
pub use gemini::GeminiExplainer;

use quadra_core::Coefficients;

/// Shown when a request succeeds but returns no text.
pub const EMPTY_RESPONSE: &str = "Could not generate the explanation.";

/// Shown when a request fails for any reason.
pub const FALLBACK: &str = "There was an error contacting the virtual tutor. \
                            Please check your connection or try again later.";

/// A source of explanation text for an equation.
pub trait Explainer: Send + Sync {
    /// A short name for logs.
    fn name(&self) -> &'static str;

    /// Requests an explanation for the equation.
    ///
    /// An empty string is a valid answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the explanation cannot be obtained.
    fn explain(&self, coeffs: &Coefficients) -> Result<String, ExplainError>;
}

impl<E: Explainer + ?Sized> Explainer for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn explain(&self, coeffs: &Coefficients) -> Result<String, ExplainError> {
        (**self).explain(coeffs)
    }
}

/// Requests an explanation, absorbing every failure into display text.
///
/// Returns [`EMPTY_RESPONSE`] for a blank answer and [`FALLBACK`] for an
/// error. Errors are logged, not returned.
pub fn explain_or_fallback<E: Explainer + ?Sized>(explainer: &E, coeffs: &Coefficients) -> String {
    tracing::debug!(explainer = explainer.name(), equation = %coeffs, "requesting explanation");

    match explainer.explain(coeffs) {
        Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE.to_owned(),
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(explainer = explainer.name(), error = %err, "explanation failed");
            FALLBACK.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<&'static str, ()>);

    impl Explainer for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn explain(&self, _coeffs: &Coefficients) -> Result<String, ExplainError> {
            match self.0 {
                Ok(text) => Ok(text.to_owned()),
                Err(()) => Err(ExplainError::MissingApiKey),
            }
        }
    }

    const COEFFS: Coefficients = Coefficients::new(1.0, -5.0, 6.0);

    #[test]
    fn passes_through_explanation_text() {
        let text = explain_or_fallback(&Fixed(Ok("Factor as (x - 2)(x - 3).")), &COEFFS);
        assert_eq!(text, "Factor as (x - 2)(x - 3).");
    }

    #[test]
    fn blank_answer_becomes_empty_response_message() {
        assert_eq!(explain_or_fallback(&Fixed(Ok("")), &COEFFS), EMPTY_RESPONSE);
        assert_eq!(explain_or_fallback(&Fixed(Ok("  \n")), &COEFFS), EMPTY_RESPONSE);
    }

    #[test]
    fn error_becomes_fallback_message() {
        assert_eq!(explain_or_fallback(&Fixed(Err(())), &COEFFS), FALLBACK);
    }

    #[test]
    fn boxed_explainers_delegate() {
        let boxed: Box<dyn Explainer> = Box::new(Fixed(Ok("boxed")));
        assert_eq!(boxed.name(), "fixed");
        assert_eq!(explain_or_fallback(&boxed, &COEFFS), "boxed");
    }
}
