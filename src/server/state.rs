use crate::{
    Result,
    config::Config,
    proxy::ProxyClient,
    session::SessionResolver,
    stream::ProxyTargets,
};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub client: ProxyClient,
    pub resolver: SessionResolver,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = ProxyClient::new(&config)?;
        Ok(Self {
            resolver: SessionResolver::new(client.clone()),
            client,
            config: Arc::new(config),
        })
    }

    pub fn proxy_targets(&self) -> ProxyTargets {
        ProxyTargets::new(
            self.config.secondary_endpoint.as_str(),
            self.config.relay_base_url.as_str(),
        )
    }
}
