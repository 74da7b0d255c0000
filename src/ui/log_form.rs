use chrono::{Datelike, NaiveDate};

use crate::data::validation::{earliest_date, validate_entry};

pub struct LogFormState {
    pub weight_input: String,
    pub date: NaiveDate,
    pub error: Option<String>,
}

impl LogFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            weight_input: String::new(),
            date: today,
            error: None,
        }
    }

    /// Validate and, on success, clear the weight field for the next entry.
    pub fn submit(&mut self, today: NaiveDate) -> Option<(NaiveDate, f64)> {
        match validate_entry(&self.weight_input, self.date, today) {
            Ok(valid) => {
                self.weight_input.clear();
                self.error = None;
                Some(valid)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

/// Inline form for logging a new weight. Returns the validated entry when
/// the user presses "Log Weight".
pub fn show_log_form(
    ui: &mut egui::Ui,
    state: &mut LogFormState,
    today: NaiveDate,
) -> Option<(NaiveDate, f64)> {
    let mut submitted = None;

    ui.horizontal(|ui| {
        ui.label("Weight (kg)");
        let weight_edit = ui.add(
            egui::TextEdit::singleline(&mut state.weight_input)
                .hint_text("e.g., 75.5")
                .desired_width(90.0),
        );
        ui.label("Date");
        ui.add(
            egui_extras::DatePickerButton::new(&mut state.date)
                .id_salt("log_entry_date")
                .start_end_years(earliest_date().year()..=today.year()),
        );

        let enter = weight_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let log_btn = egui::Button::new(egui::RichText::new("Log Weight").strong())
            .min_size(egui::vec2(110.0, 28.0));
        if ui.add(log_btn).clicked() || enter {
            submitted = state.submit(today);
        }
    });

    if let Some(msg) = &state.error {
        ui.colored_label(egui::Color32::from_rgb(255, 80, 80), msg);
    }

    submitted
}
