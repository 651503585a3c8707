// Titled text panel for the humanizer and detector views.
// Rendering only reports what the user did; views apply the events.

use egui::{Align, Button, Layout, TextEdit, Ui};
use humanize_core::word_count;

use crate::editor::InputField;

const PANEL_ROWS: usize = 16;

/// Something the user did on a panel this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    Edit(String),
    Undo,
    Redo,
    Clear,
    Copy,
}

impl PanelEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PanelEvent::Edit(_) => "edit",
            PanelEvent::Undo => "undo",
            PanelEvent::Redo => "redo",
            PanelEvent::Clear => "clear",
            PanelEvent::Copy => "copy",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextPanel<'a> {
    title: &'a str,
    placeholder: &'a str,
}

impl<'a> TextPanel<'a> {
    pub fn new(title: &'a str, placeholder: &'a str) -> Self {
        Self { title, placeholder }
    }

    /// Editable panel with undo, redo and clear controls.
    pub fn show_input(&self, ui: &mut Ui, field: &InputField) -> Option<PanelEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            ui.strong(self.title);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Clear").on_hover_text("Clear Text").clicked() {
                    event = Some(PanelEvent::Clear);
                }
                if ui
                    .add_enabled(field.can_redo(), Button::new("Redo"))
                    .on_hover_text("Redo")
                    .clicked()
                {
                    event = Some(PanelEvent::Redo);
                }
                if ui
                    .add_enabled(field.can_undo(), Button::new("Undo"))
                    .on_hover_text("Undo")
                    .clicked()
                {
                    event = Some(PanelEvent::Undo);
                }
            });
        });
        ui.separator();

        let mut buffer = field.text().to_owned();
        let response = ui.add(
            TextEdit::multiline(&mut buffer)
                .hint_text(self.placeholder)
                .desired_rows(PANEL_ROWS)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            event = Some(PanelEvent::Edit(buffer));
        }

        ui.separator();
        ui.label(format!("Word Count: {}", field.word_count()));
        event
    }

    /// Read-only panel with a copy control and a loading spinner.
    pub fn show_output(
        &self,
        ui: &mut Ui,
        text: &str,
        loading: bool,
        copied: bool,
    ) -> Option<PanelEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            ui.strong(self.title);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let label = if copied { "Copied!" } else { "Copy" };
                if ui
                    .add_enabled(!text.is_empty(), Button::new(label))
                    .on_hover_text("Copy to Clipboard")
                    .clicked()
                {
                    event = Some(PanelEvent::Copy);
                }
            });
        });
        ui.separator();

        if loading {
            ui.spinner();
        } else {
            let mut view = text;
            ui.add(
                TextEdit::multiline(&mut view)
                    .hint_text(self.placeholder)
                    .desired_rows(PANEL_ROWS)
                    .desired_width(f32::INFINITY),
            );
        }

        ui.separator();
        ui.label(format!("Word Count: {}", word_count(text)));
        event
    }
}
