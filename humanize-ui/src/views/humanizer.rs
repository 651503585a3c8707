// Humanizer screen: AI text in, rewritten text out.

use std::time::{Duration, Instant};

use egui::{Button, Color32, Ui};
use humanize_ai::{HumanizeRequestV1, WritingVariety};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::editor::{InputField, PanelEvent, TextPanel};

const HUMANIZE_FAILED: &str = "Failed to humanize text. Please try again.";

pub(crate) const ERROR_COLOR: Color32 = Color32::from_rgb(248, 113, 113);

#[derive(Debug, Clone)]
pub struct HumanizerView {
    input: InputField,
    output: String,
    error: Option<String>,
    variety: WritingVariety,
    in_flight: Option<Uuid>,
    copied_at: Option<Instant>,
    copy_feedback: Duration,
}

impl HumanizerView {
    pub fn new(input: InputField, variety: WritingVariety, copy_feedback: Duration) -> Self {
        Self {
            input,
            output: String::new(),
            error: None,
            variety,
            in_flight: None,
            copied_at: None,
            copy_feedback,
        }
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn variety(&self) -> WritingVariety {
        self.variety
    }

    pub fn set_variety(&mut self, variety: WritingVariety) {
        debug!(?variety, "Writing style changed");
        self.variety = variety;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.text().trim().is_empty()
    }

    /// Start a humanize request for the current input.
    ///
    /// Returns `None` while another request is in flight or when the input is
    /// blank.
    pub fn begin_humanize(&mut self) -> Option<HumanizeRequestV1> {
        if self.is_loading() {
            debug!("Humanize already in flight, ignoring");
            return None;
        }

        self.input.flush();
        let request = match HumanizeRequestV1::new(self.input.text(), self.variety) {
            Ok(request) => request,
            Err(err) => {
                debug!("Not humanizing: {}", err);
                return None;
            }
        };

        info!(request_id = %request.request_id, variety = ?self.variety, "Humanize requested");
        self.in_flight = Some(request.request_id);
        self.error = None;
        self.output.clear();
        self.copied_at = None;
        Some(request)
    }

    /// Apply the outcome of the request started by [`begin_humanize`](Self::begin_humanize).
    pub fn finish_humanize(&mut self, request_id: Uuid, result: anyhow::Result<String>) {
        if self.in_flight != Some(request_id) {
            warn!(%request_id, "Dropping stale humanize result");
            return;
        }
        self.in_flight = None;

        match result {
            Ok(text) => {
                info!(%request_id, words = humanize_core::word_count(&text), "Humanize finished");
                self.output = text;
            }
            Err(err) => {
                error!(%request_id, "Humanize failed: {:#}", err);
                self.error = Some(HUMANIZE_FAILED.to_string());
            }
        }
    }

    /// Empty the input (dropping its undo trail) and everything derived from it.
    pub fn clear(&mut self) {
        info!("Clearing humanizer");
        self.input.clear();
        self.output.clear();
        self.error = None;
        self.copied_at = None;
    }

    /// Text for the clipboard, if there is any output.
    pub fn copy_output(&mut self, now: Instant) -> Option<String> {
        if self.output.is_empty() {
            return None;
        }
        self.copied_at = Some(now);
        Some(self.output.clone())
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.copy_feedback)
    }

    /// Apply a panel event. Returns text to put on the clipboard.
    pub fn handle_event(&mut self, event: PanelEvent, now: Instant) -> Option<String> {
        debug!(event = event.name(), "Humanizer panel event");
        match event {
            PanelEvent::Edit(text) => self.input.edit(text, now),
            PanelEvent::Undo => {
                self.input.undo();
            }
            PanelEvent::Redo => {
                self.input.redo();
            }
            PanelEvent::Clear => self.clear(),
            PanelEvent::Copy => return self.copy_output(now),
        }
        None
    }

    pub fn show(&mut self, ui: &mut Ui, now: Instant) -> Option<HumanizeRequestV1> {
        self.input.flush_if_idle(now);

        let loading = self.is_loading();
        let copied = self.is_copied(now);
        let mut events = Vec::new();

        ui.columns(2, |columns| {
            let input = TextPanel::new("AI Text", "Paste your AI-generated text here...");
            if let Some(event) = input.show_input(&mut columns[0], &self.input) {
                events.push(event);
            }

            let output = TextPanel::new("Humanized Text", "Your human-like text will appear here...");
            if let Some(event) = output.show_output(&mut columns[1], &self.output, loading, copied) {
                events.push(event);
            }
        });

        for event in events {
            if let Some(text) = self.handle_event(event, now) {
                ui.ctx().copy_text(text);
            }
        }

        if let Some(err) = &self.error {
            ui.colored_label(ERROR_COLOR, err.as_str());
        }

        ui.horizontal(|ui| {
            ui.label("Writing Style:");
            for variety in WritingVariety::ALL {
                if ui
                    .selectable_value(&mut self.variety, variety, variety.label())
                    .changed()
                {
                    debug!(?variety, "Writing style changed");
                }
            }
        });

        let label = if loading { "Humanizing..." } else { "Humanize" };
        let mut request = None;
        if ui.add_enabled(self.can_submit(), Button::new(label)).clicked() {
            request = self.begin_humanize();
        }

        if self.input.has_pending() {
            ui.ctx().request_repaint_after(self.input.coalesce_window());
        }
        if self.is_copied(now) {
            ui.ctx().request_repaint_after(self.copy_feedback);
        }

        request
    }
}

impl Default for HumanizerView {
    fn default() -> Self {
        Self::new(
            InputField::default(),
            WritingVariety::default(),
            Duration::from_millis(2000),
        )
    }
}
