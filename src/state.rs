use crate::config::Config;
use crate::export::TrackedChangesExporter;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub exporter: Arc<dyn TrackedChangesExporter>,
}
