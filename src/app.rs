use chrono::NaiveDate;
use eframe::egui;

use crate::data::export;
use crate::state::app_state::{AppState, VERSION};
use crate::ui::edit_dialog::{self, EditDialogState, EditResult};
use crate::ui::entry_table::{self, EntryAction};
use crate::ui::log_form::{self, LogFormState};
use crate::ui::weight_chart;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient message shown in the footer until dismissed or replaced.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    fn color(&self) -> egui::Color32 {
        match self.kind {
            NoticeKind::Info => egui::Color32::from_rgb(100, 160, 255),
            NoticeKind::Success => egui::Color32::from_rgb(34, 197, 94),
            NoticeKind::Error => egui::Color32::from_rgb(255, 80, 80),
        }
    }
}

const NOT_SAVED_MESSAGE: &str =
    "Not saved: the data file could not be loaded. Changes will be lost when Momentum closes.";

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The main Momentum application.
pub struct MomentumApp {
    pub state: AppState,
    /// Active edit dialog for one entry.
    pub edit_dialog: Option<EditDialogState>,
    pub log_form: LogFormState,
    pub notice: Option<Notice>,
    /// Cleared when the data file could not be read, so a broken file is
    /// never overwritten with an empty store.
    save_enabled: bool,
    pub show_about: bool,
}

impl MomentumApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, load_error: Option<String>) -> Self {
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(22.0),
        );

        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);
        style.visuals.window_corner_radius = egui::CornerRadius::same(8);

        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        Self::with_state(state, load_error)
    }

    /// Build the app around already-loaded state. `load_error` disables saving.
    pub fn with_state(state: AppState, load_error: Option<String>) -> Self {
        let save_enabled = load_error.is_none();
        Self {
            state,
            edit_dialog: None,
            log_form: LogFormState::new(today()),
            notice: load_error.map(Notice::error),
            save_enabled,
            show_about: false,
        }
    }

    /// Write the store to disk. The error is the user-facing reason it was not saved.
    fn persist(&mut self) -> Result<(), String> {
        if !self.save_enabled {
            tracing::warn!("Skipping save: data file was not loaded cleanly");
            return Err(NOT_SAVED_MESSAGE.to_string());
        }
        self.state.save().map_err(|e| {
            tracing::error!("Failed to save entries: {e}");
            format!("Could not save your entries: {e}")
        })
    }

    /// Save after a store change and report the outcome.
    fn commit(&mut self, done: Notice) {
        self.notice = Some(match self.persist() {
            Ok(()) => done,
            Err(reason) => Notice::error(reason),
        });
    }

    fn log_entry(&mut self, date: NaiveDate, weight: f64) {
        match self.state.store.add_entry(date, weight) {
            Ok(id) => {
                tracing::info!("Logged entry {id}: {weight} kg on {date}");
                self.commit(Notice::success("Weight logged!"));
            }
            Err(e) => {
                tracing::error!("Failed to log weight entry: {e}");
                self.notice = Some(Notice::error("Something went wrong. Could not log your entry."));
            }
        }
    }

    fn update_entry(&mut self, id: u64, date: NaiveDate, weight: f64) -> bool {
        match self.state.store.update_entry(id, date, weight) {
            Ok(()) => {
                tracing::info!("Updated entry {id}: {weight} kg on {date}");
                self.commit(Notice::success("Entry updated successfully!"));
                true
            }
            Err(e) => {
                tracing::error!("Failed to update weight entry: {e}");
                self.notice = Some(Notice::error(
                    "Something went wrong. Could not update your entry. Please try again.",
                ));
                false
            }
        }
    }

    fn delete_entry(&mut self, id: u64) {
        match self.state.store.remove_entry(id) {
            Ok(removed) => {
                tracing::info!("Deleted entry {id} ({})", removed.iso_date());
                self.commit(Notice::info("Entry deleted."));
            }
            Err(e) => {
                tracing::error!("Failed to delete weight entry: {e}");
                self.notice = Some(Notice::error(format!("Could not delete entry: {e}")));
            }
        }
    }

    /// Export all entries to a CSV file via a save dialog.
    fn export_csv(&mut self) {
        if self.state.store.is_empty() {
            self.notice = Some(Notice::info("No data to export. Log some weight entries first."));
            return;
        }

        let csv = match self.state.store.export_entries() {
            Ok(csv) => csv,
            Err(e) => {
                tracing::error!("Failed to export data: {e}");
                self.notice = Some(Notice::error("Export failed. Could not export your data. Please try again."));
                return;
            }
        };

        let filename = export::export_file_name(today());
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(&filename)
            .add_filter("CSV Files", &["csv"])
            .save_file()
        {
            match std::fs::write(&path, csv) {
                Ok(()) => {
                    tracing::info!("Exported CSV to {:?}", path);
                    self.notice = Some(Notice::success("Data exported successfully!"));
                }
                Err(e) => {
                    tracing::error!("Failed to export data: {e}");
                    self.notice = Some(Notice::error("Export failed. Could not export your data. Please try again."));
                }
            }
        }
    }
}

impl eframe::App for MomentumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut vis = self.state.theme.visuals();
        vis.window_corner_radius = egui::CornerRadius::same(8);
        ctx.set_visuals(vis);

        let today = today();

        // ------------------------------------------------------------------
        // 1. Header: title, export and theme toggle
        // ------------------------------------------------------------------
        let mut export_clicked = false;
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.visuals_mut().override_text_color = Some(ui.visuals().strong_text_color());
                let heading_response = ui.heading("Momentum");
                ui.visuals_mut().override_text_color = None;
                heading_response.context_menu(|ui| {
                    if ui.button("About Momentum").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.state.theme.toggle_label()).clicked() {
                        self.state.theme = self.state.theme.toggle();
                    }
                    ui.separator();
                    if ui.button("Export").on_hover_text("Download entries as CSV").clicked() {
                        export_clicked = true;
                    }
                    ui.separator();
                    ui.small(format!("v{VERSION}"));
                });
            });
        });

        if export_clicked {
            self.export_csv();
        }

        // ------------------------------------------------------------------
        // 2. Footer: entry count and the latest notice
        // ------------------------------------------------------------------
        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 6)))
            .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let count = self.state.store.len();
                let label = if count == 1 { "1 entry".to_string() } else { format!("{count} entries") };
                ui.label(egui::RichText::new(label).weak());

                let mut dismiss = false;
                if let Some(notice) = &self.notice {
                    ui.separator();
                    ui.colored_label(notice.color(), &notice.message);
                    dismiss = ui.small_button("dismiss").clicked();
                }
                if dismiss {
                    self.notice = None;
                }
            });
        });

        // ------------------------------------------------------------------
        // 3. Central panel: log form, chart, entry list
        // ------------------------------------------------------------------
        self.state.refresh_chart();
        let mut logged = None;
        let mut row_action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(egui::RichText::new("Log Weight").strong().size(15.0));
                ui.add_space(4.0);
                logged = log_form::show_log_form(ui, &mut self.log_form, today);

                ui.add_space(12.0);
                match self.state.chart() {
                    Ok(Some(data)) => {
                        weight_chart::show_weight_chart(ui, data, &self.state.theme, 320.0);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        ui.colored_label(
                            egui::Color32::from_rgb(255, 80, 80),
                            format!("Cannot draw chart: {e}"),
                        );
                    }
                }

                ui.add_space(12.0);
                ui.label(egui::RichText::new("History").strong().size(15.0));
                ui.add_space(4.0);
                row_action = entry_table::show_entry_table(ui, self.state.store.entries());
            });
        });

        if let Some((date, weight)) = logged {
            self.log_entry(date, weight);
        }

        match row_action {
            Some(EntryAction::Edit(id)) => {
                self.edit_dialog = self.state.store.entry(id).map(EditDialogState::new);
            }
            Some(EntryAction::Delete(id)) => {
                if self.edit_dialog.as_ref().map(|d| d.entry_id) == Some(id) {
                    self.edit_dialog = None;
                }
                self.delete_entry(id);
            }
            None => {}
        }

        // ------------------------------------------------------------------
        // 4. Edit dialog
        // ------------------------------------------------------------------
        let mut close_edit = false;
        let mut save_edit: Option<(u64, NaiveDate, f64)> = None;
        if let Some(ref mut dialog) = self.edit_dialog {
            match edit_dialog::show_edit_dialog(ctx, dialog, today) {
                Some(EditResult::Save { id, date, weight }) => save_edit = Some((id, date, weight)),
                Some(EditResult::Cancel) => close_edit = true,
                None => {}
            }
        }
        if let Some((id, date, weight)) = save_edit {
            // Keep the dialog open on failure so the user can retry.
            close_edit = self.update_entry(id, date, weight);
        }
        if close_edit {
            self.edit_dialog = None;
        }

        // ------------------------------------------------------------------
        // 5. About window (hidden menu)
        // ------------------------------------------------------------------
        if self.show_about {
            egui::Window::new("About Momentum")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .default_width(320.0)
                .show(ctx, |ui| {
                    ui.heading("Momentum");
                    ui.label(format!("Version: {VERSION}"));
                    ui.add_space(4.0);
                    ui.label("A small personal weight tracker.");
                    ui.add_space(10.0);
                    ui.label(format!("Data file: {}", self.state.config.data_file.display()));
                    ui.add_space(10.0);
                    ui.label("Right-click the title for this menu.");
                });
        }
    }
}
