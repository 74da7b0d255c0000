use chrono::{Datelike, NaiveDate};

use crate::data::entry::WeightEntry;
use crate::data::validation::{earliest_date, validate_entry, weight_input_text};

/// Persistent state for the edit dialog, created when the user clicks Edit
/// on an entry.
pub struct EditDialogState {
    pub entry_id: u64,
    pub weight_input: String,
    pub date: NaiveDate,
    /// Last validation message, shown under the form.
    pub error: Option<String>,
}

impl EditDialogState {
    pub fn new(entry: &WeightEntry) -> Self {
        Self {
            entry_id: entry.id,
            weight_input: weight_input_text(entry.weight),
            date: entry.date,
            error: None,
        }
    }

    /// Validate the form. On failure the message is kept for display.
    pub fn submit(&mut self, today: NaiveDate) -> Option<EditResult> {
        match validate_entry(&self.weight_input, self.date, today) {
            Ok((date, weight)) => {
                self.error = None;
                Some(EditResult::Save { id: self.entry_id, date, weight })
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditResult {
    Save { id: u64, date: NaiveDate, weight: f64 },
    Cancel,
}

/// Show the edit dialog window.
///
/// Returns `Some(EditResult)` when the user saves a valid form or closes the
/// dialog, `None` while it is still open.
pub fn show_edit_dialog(
    ctx: &egui::Context,
    state: &mut EditDialogState,
    today: NaiveDate,
) -> Option<EditResult> {
    let mut result = None;
    let mut open = true;

    egui::Window::new("Edit Weight Entry")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(
                    "Update the weight and date for this entry. Click save when you're done.",
                )
                .weak(),
            );
            ui.add_space(10.0);

            ui.label(egui::RichText::new("Weight (kg)").strong());
            let weight_edit = ui.add(
                egui::TextEdit::singleline(&mut state.weight_input)
                    .hint_text("e.g., 75.5")
                    .desired_width(200.0),
            );

            ui.add_space(8.0);
            ui.label(egui::RichText::new("Date").strong());
            ui.add(
                egui_extras::DatePickerButton::new(&mut state.date)
                    .id_salt("edit_entry_date")
                    .start_end_years(earliest_date().year()..=today.year()),
            );

            if let Some(msg) = &state.error {
                ui.add_space(6.0);
                ui.colored_label(egui::Color32::from_rgb(255, 80, 80), msg);
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let enter = weight_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let save = ui.add(egui::Button::new("Save Changes").min_size(egui::vec2(110.0, 28.0)));
                if save.clicked() || enter {
                    result = state.submit(today);
                }
                if ui.add(egui::Button::new("Cancel").min_size(egui::vec2(80.0, 28.0))).clicked() {
                    result = Some(EditResult::Cancel);
                }
            });
        });

    if !open && result.is_none() {
        result = Some(EditResult::Cancel);
    }
    result
}
