use crate::data::entry::WeightEntry;

/// Row action requested from the entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Edit(u64),
    Delete(u64),
}

/// Show the logged entries, newest first.
pub fn show_entry_table(ui: &mut egui::Ui, entries: &[WeightEntry]) -> Option<EntryAction> {
    use egui_extras::{Column, TableBuilder};

    if entries.is_empty() {
        ui.label(egui::RichText::new("No entries yet. Log your first weight above.").weak());
        return None;
    }

    let mut action = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .min_scrolled_height(200.0)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Date");
            });
            header.col(|ui| {
                ui.strong("Weight");
            });
            header.col(|_ui| {});
        })
        .body(|body| {
            body.rows(26.0, entries.len(), |mut row| {
                // Newest first.
                let entry = &entries[entries.len() - 1 - row.index()];
                row.col(|ui| {
                    ui.label(entry.date.format("%b %-d, %Y").to_string());
                });
                row.col(|ui| {
                    ui.label(entry.display_weight());
                });
                row.col(|ui| {
                    if ui.small_button("Edit").on_hover_text("Edit this entry").clicked() {
                        action = Some(EntryAction::Edit(entry.id));
                    }
                    if ui.small_button("Delete").on_hover_text("Delete this entry").clicked() {
                        action = Some(EntryAction::Delete(entry.id));
                    }
                });
            });
        });

    action
}
