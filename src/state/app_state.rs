use crate::config::AppConfig;
use crate::data::error::Result;
use crate::processing::chart_data::{derive_chart_data, ChartData};
use crate::state::theme::Theme;
use crate::state::weight_store::WeightStore;

pub const VERSION: &str = "0.1.0";

/// Chart derivation for one store revision.
struct ChartCache {
    revision: u64,
    data: std::result::Result<Option<ChartData>, String>,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: WeightStore,
    pub theme: Theme,
    chart_cache: Option<ChartCache>,
}

impl AppState {
    pub fn new(config: AppConfig, store: WeightStore) -> Self {
        Self {
            config,
            store,
            theme: Theme::default(),
            chart_cache: None,
        }
    }

    /// Load the store from the configured data file.
    pub fn load(config: AppConfig) -> Result<Self> {
        let store = WeightStore::load(&config.data_file)?;
        tracing::info!(
            "Loaded {} entries from {:?}",
            store.len(),
            config.data_file
        );
        Ok(Self::new(config, store))
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.config.data_file)?;
        tracing::debug!("Saved {} entries to {:?}", self.store.len(), self.config.data_file);
        Ok(())
    }

    /// Re-derive the chart if the store changed since the last call.
    pub fn refresh_chart(&mut self) {
        let revision = self.store.revision();
        let stale = self
            .chart_cache
            .as_ref()
            .map_or(true, |c| c.revision != revision);
        if !stale {
            return;
        }
        let data = derive_chart_data(self.store.entries()).map_err(|e| e.to_string());
        if let Err(e) = &data {
            tracing::warn!("Cannot chart entries: {e}");
        }
        self.chart_cache = Some(ChartCache { revision, data });
    }

    /// Chart data from the last `refresh_chart`. `Ok(None)` means no entries.
    pub fn chart(&self) -> std::result::Result<Option<&ChartData>, &str> {
        match self.chart_cache.as_ref().map(|c| &c.data) {
            Some(Ok(data)) => Ok(data.as_ref()),
            Some(Err(e)) => Err(e.as_str()),
            None => Ok(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default(), WeightStore::new())
    }
}
