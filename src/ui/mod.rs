pub mod edit_dialog;
pub mod entry_table;
pub mod log_form;
pub mod weight_chart;
