// AI detector screen: text in, authorship scores out.

use std::time::Instant;

use egui::{Button, Color32, ProgressBar, RichText, Ui};
use humanize_ai::{bar_fraction, AiDetectionResultV1, DetectRequestV1, Verdict};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::editor::{InputField, PanelEvent, TextPanel};
use crate::views::humanizer::ERROR_COLOR;

fn verdict_color(verdict: Verdict) -> Color32 {
    match verdict {
        Verdict::LikelyAi => Color32::from_rgb(239, 68, 68),
        Verdict::PotentiallyAi => Color32::from_rgb(234, 179, 8),
        Verdict::LikelyHuman => Color32::from_rgb(34, 197, 94),
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetectorView {
    input: InputField,
    result: Option<AiDetectionResultV1>,
    error: Option<String>,
    in_flight: Option<Uuid>,
}

impl DetectorView {
    pub fn new(input: InputField) -> Self {
        Self {
            input,
            result: None,
            error: None,
            in_flight: None,
        }
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn result(&self) -> Option<&AiDetectionResultV1> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.text().trim().is_empty()
    }

    pub fn begin_analyze(&mut self) -> Option<DetectRequestV1> {
        if self.is_loading() {
            debug!("Analysis already in flight, ignoring");
            return None;
        }

        self.input.flush();
        let request = match DetectRequestV1::new(self.input.text()) {
            Ok(request) => request,
            Err(err) => {
                debug!("Not analyzing: {}", err);
                return None;
            }
        };

        info!(request_id = %request.request_id, "Analysis requested");
        self.in_flight = Some(request.request_id);
        self.error = None;
        self.result = None;
        Some(request)
    }

    pub fn finish_analyze(
        &mut self,
        request_id: Uuid,
        result: anyhow::Result<AiDetectionResultV1>,
    ) {
        if self.in_flight != Some(request_id) {
            warn!(%request_id, "Dropping stale detection result");
            return;
        }
        self.in_flight = None;

        match result {
            Ok(result) => {
                info!(%request_id, score = result.overall_score, "Analysis finished");
                self.result = Some(result);
            }
            Err(err) => {
                error!(%request_id, "Analysis failed: {:#}", err);
                self.error = Some(format!("Failed to analyze text. {:#}", err));
            }
        }
    }

    pub fn clear(&mut self) {
        info!("Clearing detector");
        self.input.clear();
        self.result = None;
        self.error = None;
    }

    pub fn handle_event(&mut self, event: PanelEvent, now: Instant) {
        debug!(event = event.name(), "Detector panel event");
        match event {
            PanelEvent::Edit(text) => self.input.edit(text, now),
            PanelEvent::Undo => {
                self.input.undo();
            }
            PanelEvent::Redo => {
                self.input.redo();
            }
            PanelEvent::Clear => self.clear(),
            // input panels have no copy control
            PanelEvent::Copy => {}
        }
    }

    pub fn show(&mut self, ui: &mut Ui, now: Instant) -> Option<DetectRequestV1> {
        self.input.flush_if_idle(now);

        let panel = TextPanel::new(
            "Text to Analyze",
            "Paste text here to check for AI content...",
        );
        if let Some(event) = panel.show_input(ui, &self.input) {
            self.handle_event(event, now);
        }

        let loading = self.is_loading();
        let label = if loading { "Analyzing..." } else { "Analyze Text" };
        let mut request = None;
        if ui.add_enabled(self.can_submit(), Button::new(label)).clicked() {
            request = self.begin_analyze();
        }

        if let Some(err) = &self.error {
            ui.colored_label(ERROR_COLOR, err.as_str());
        }

        if self.is_loading() {
            ui.spinner();
        } else if let Some(result) = &self.result {
            show_result(ui, result);
        }

        if self.input.has_pending() {
            ui.ctx().request_repaint_after(self.input.coalesce_window());
        }

        request
    }
}

fn score_bar(ui: &mut Ui, score: f32) {
    let color = verdict_color(Verdict::from_score(score));
    ui.add(ProgressBar::new(bar_fraction(score)).fill(color));
}

fn show_result(ui: &mut Ui, result: &AiDetectionResultV1) {
    let verdict = result.verdict();
    let color = verdict_color(verdict);

    ui.vertical_centered(|ui| {
        ui.heading("Overall Analysis");
        ui.label(
            RichText::new(format!("{:.0}%", result.overall_score.round()))
                .size(40.0)
                .strong()
                .color(color),
        );
        ui.label(verdict.label());
    });
    score_bar(ui, result.overall_score);
    ui.label(RichText::new(format!("\"{}\"", result.overall_explanation)).italics());

    ui.separator();
    ui.heading("Detailed Breakdown");
    for (kind, metric) in result.metrics() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong(kind.title());
                ui.label(
                    RichText::new(format!("{:.0}%", metric.score.round()))
                        .strong()
                        .color(verdict_color(Verdict::from_score(metric.score))),
                );
            });
            score_bar(ui, metric.score);
            ui.label(metric.explanation.as_str());
        });
    }
}
