pub mod app_state;
pub mod theme;
pub mod weight_store;
