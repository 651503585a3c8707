// App shell: tab bar plus the active view.

use std::time::Instant;

use anyhow::Context;
use egui::Ui;
use humanize_ai::{parse_detection, DetectRequestV1, HumanizeRequestV1};
use tracing::info;
use uuid::Uuid;

use crate::config::UiConfig;
use crate::editor::InputField;
use crate::views::{DetectorView, HumanizerView};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Humanizer,
    Detector,
}

/// A call the host should make to the AI service.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundRequest {
    Humanize(HumanizeRequestV1),
    Detect(DetectRequestV1),
}

impl OutboundRequest {
    pub fn request_id(&self) -> Uuid {
        match self {
            OutboundRequest::Humanize(request) => request.request_id,
            OutboundRequest::Detect(request) => request.request_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct App {
    active: ActiveView,
    humanizer: HumanizerView,
    detector: DetectorView,
}

impl App {
    /// Build both views from `config`. Each view owns its own input history.
    pub fn new(config: &UiConfig) -> anyhow::Result<Self> {
        let input_field = || -> anyhow::Result<InputField> {
            let history = config
                .history
                .build(String::new())
                .context("build input history")?;
            Ok(InputField::new(history).with_coalesce(config.coalesce()))
        };

        info!(
            capacity = config.history.capacity,
            coalesce_ms = config.coalesce_ms,
            "Starting app"
        );

        Ok(Self {
            active: ActiveView::default(),
            humanizer: HumanizerView::new(
                input_field()?,
                config.default_variety,
                config.copy_feedback(),
            ),
            detector: DetectorView::new(input_field()?),
        })
    }

    pub fn active(&self) -> ActiveView {
        self.active
    }

    pub fn set_active(&mut self, view: ActiveView) {
        self.active = view;
    }

    pub fn humanizer(&self) -> &HumanizerView {
        &self.humanizer
    }

    pub fn humanizer_mut(&mut self) -> &mut HumanizerView {
        &mut self.humanizer
    }

    pub fn detector(&self) -> &DetectorView {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut DetectorView {
        &mut self.detector
    }

    /// Draw one frame. Returns the request the user triggered, if any.
    pub fn show(&mut self, ui: &mut Ui, now: Instant) -> Option<OutboundRequest> {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.active, ActiveView::Humanizer, "Humanizer");
            ui.selectable_value(&mut self.active, ActiveView::Detector, "AI Detector");
        });
        ui.separator();

        match self.active {
            ActiveView::Humanizer => self
                .humanizer
                .show(ui, now)
                .map(OutboundRequest::Humanize),
            ActiveView::Detector => self.detector.show(ui, now).map(OutboundRequest::Detect),
        }
    }

    /// Hand back the rewritten text (or the failure) for a humanize request.
    pub fn deliver_humanize(&mut self, request_id: Uuid, result: anyhow::Result<String>) {
        self.humanizer.finish_humanize(request_id, result);
    }

    /// Hand back the raw response body (or the failure) for a detect request.
    pub fn deliver_detection(&mut self, request_id: Uuid, body: anyhow::Result<String>) {
        let result = body.and_then(|json| {
            parse_detection(&json).context("invalid detection response")
        });
        self.detector.finish_analyze(request_id, result);
    }
}
