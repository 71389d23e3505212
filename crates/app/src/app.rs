//! The egui viewer.

use std::{sync::Arc, time::Duration};

use eframe::egui::{self, Color32, RichText};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, VLine};

use quadra_core::{EquationKind, Roots, fixed, format_equation, presets::PRESETS};
use quadra_explain::Explainer;
use quadra_report::ReportConfig;

use crate::{settings::Settings, state::AppState, worker::ExplainWorker};

const CURVE: Color32 = Color32::from_rgb(0, 113, 227);
const ROOT_MARKER: Color32 = Color32::from_rgb(239, 68, 68);

/// How often to check for a finished explanation while one is running.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A runnable egui application for solving and plotting equations.
pub struct QuadraApp {
    state: AppState,
    worker: ExplainWorker,
    report: ReportConfig,
}

impl QuadraApp {
    #[must_use]
    pub fn new(settings: Settings, explainer: Arc<dyn Explainer>) -> Self {
        Self {
            state: AppState::default(),
            worker: ExplainWorker::new(explainer),
            report: settings.report,
        }
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self) -> Result<(), eframe::Error> {
        eframe::run_native(
            "Quadra",
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }

    fn receive_answers(&mut self) {
        while let Some(answer) = self.worker.poll() {
            self.state.finish_explain(answer.ticket, answer.text);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Coefficients");

        let mut coeffs = self.state.coefficients();
        egui::Grid::new("coefficients").num_columns(2).show(ui, |ui| {
            for (label, value) in [
                ("a (x²)", &mut coeffs.a),
                ("b (x)", &mut coeffs.b),
                ("c (constant)", &mut coeffs.c),
            ] {
                ui.label(label);
                ui.add(egui::DragValue::new(value).speed(0.1));
                ui.end_row();
            }
        });

        ui.separator();
        ui.label("Examples");
        for preset in &PRESETS {
            if ui.button(preset.label).clicked() {
                coeffs = preset.coefficients;
            }
        }

        self.state.set_coefficients(coeffs);

        ui.separator();
        if ui.button("Export report").clicked() {
            self.export();
        }
        if let Some(status) = self.state.status() {
            ui.label(RichText::new(status).weak());
        }
    }

    fn export(&mut self) {
        let status = match self.state.report().export_text(&self.report) {
            Ok(()) => format!("Saved {}", self.report.path.display()),
            Err(err) => {
                tracing::warn!(error = %err, "report export failed");
                format!("Export failed: {err}")
            }
        };
        self.state.set_status(status);
    }

    fn results(&self, ui: &mut egui::Ui) {
        let solution = self.state.solution();

        ui.label(RichText::new(solution.kind.label()).color(kind_color(solution.kind)).strong());
        ui.label(RichText::new(format_equation(&self.state.coefficients())).monospace().size(20.0));

        egui::Grid::new("results").num_columns(2).show(ui, |ui| {
            ui.label("Discriminant (Δ)");
            ui.label(RichText::new(solution.discriminant.to_string()).monospace());
            ui.end_row();

            ui.label("Solutions");
            ui.label(RichText::new(solution.roots.summary()).strong());
            ui.end_row();

            ui.label("Vertex");
            ui.label(format!(
                "({}, {})",
                fixed(solution.vertex.x, 2),
                fixed(solution.vertex.y, 2)
            ));
            ui.end_row();
        });

        if solution.is_degenerate() {
            ui.label(RichText::new("a = 0 and b = 0: no solution or infinitely many").weak());
        }
    }

    fn chart(&self, ui: &mut egui::Ui) {
        let curve: PlotPoints = self.state.points().iter().copied().map(<[f64; 2]>::from).collect();
        let roots = chart_roots(&self.state.solution().roots);
        let equation = format_equation(&self.state.coefficients());

        Plot::new("parabola")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.hline(HLine::new(0.0).color(Color32::GRAY));
                plot_ui.vline(VLine::new(0.0).color(Color32::GRAY));
                plot_ui.line(Line::new(curve).color(CURVE).width(3.0).name(equation));
                for x in roots {
                    plot_ui.vline(
                        VLine::new(x)
                            .color(ROOT_MARKER)
                            .style(LineStyle::dashed_dense())
                            .name("root"),
                    );
                }
            });
    }

    fn tutor(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Virtual tutor");
            let button = egui::Button::new("Explain step by step");
            if ui.add_enabled(self.state.can_explain(), button).clicked() {
                if let Some(ticket) = self.state.begin_explain() {
                    self.worker.request(ticket);
                }
            }
            if self.state.is_explaining() {
                ui.spinner();
                ui.label("Analyzing...");
            }
        });

        egui::ScrollArea::vertical().show(ui, |ui| match self.state.explanation() {
            Some(text) => {
                ui.label(text);
            }
            None => {
                let hint = "Press the button to get a detailed explanation of the procedure.";
                ui.label(RichText::new(hint).weak());
            }
        });
    }
}

impl eframe::App for QuadraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_answers();

        egui::SidePanel::left("controls").show(ctx, |ui| self.controls(ui));
        egui::TopBottomPanel::bottom("tutor")
            .resizable(true)
            .min_height(160.0)
            .show(ctx, |ui| self.tutor(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            self.results(ui);
            ui.separator();
            self.chart(ui);
        });

        if self.state.is_explaining() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

fn kind_color(kind: EquationKind) -> Color32 {
    match kind {
        EquationKind::Complete => Color32::from_rgb(126, 34, 206),
        EquationKind::Linear => Color32::from_rgb(185, 28, 28),
        EquationKind::IncompleteB | EquationKind::IncompleteC => Color32::from_rgb(180, 83, 9),
    }
}

/// The x positions to mark on the chart: every finite real root.
fn chart_roots(roots: &Roots) -> Vec<f64> {
    roots.values().into_iter().filter(|x| x.is_finite()).collect()
}
