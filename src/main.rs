use eframe::egui;
use eframe::egui_wgpu;
use momentum::app::MomentumApp;
use momentum::config::AppConfig;
use momentum::state::app_state::AppState;
use momentum::state::weight_store::WeightStore;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    let (state, load_error) = match AppState::load(config.clone()) {
        Ok(state) => (state, None),
        Err(e) => {
            tracing::error!("Failed to load entries from {:?}: {e}", config.data_file);
            let message = format!("Could not load your entries: {e}");
            (AppState::new(config, WeightStore::new()), Some(message))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Momentum")
            .with_inner_size([900.0, 820.0])
            .with_min_inner_size([520.0, 480.0]),
        wgpu_options: egui_wgpu::WgpuConfiguration {
            present_mode: eframe::wgpu::PresentMode::AutoVsync,
            ..Default::default()
        },
        ..Default::default()
    };

    eframe::run_native(
        "Momentum",
        options,
        Box::new(move |cc| Ok(Box::new(MomentumApp::new(cc, state, load_error)))),
    )
}
