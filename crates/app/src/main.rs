//! Quadra desktop viewer.
//!
//! Solves the equation as its coefficients are edited, plots the parabola,
//! asks the virtual tutor for explanations, and exports text reports.
//!
//! Settings are read from `$QUADRA_CONFIG` or `~/.quadra/config.toml`; the
//! Gemini API key comes from `GEMINI_API_KEY` or `API_KEY`. Log verbosity
//! follows `RUST_LOG` and defaults to `info`.

mod app;
mod settings;
mod state;
mod worker;

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use quadra_explain::GeminiExplainer;

use crate::{app::QuadraApp, settings::Settings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    if settings.explain.api_key.is_none() {
        tracing::warn!("no API key configured; explanations will show the fallback message");
    }

    let explainer =
        GeminiExplainer::new(settings.explain.clone()).context("configuring explainer")?;
    tracing::info!(model = %explainer.config().model, "starting viewer");

    QuadraApp::new(settings, Arc::new(explainer))
        .run()
        .map_err(|err| anyhow!("failed to open window: {err}"))
}
