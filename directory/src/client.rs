use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use common::{
    config::Config,
    models::{Customer, CustomersEnvelope},
};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client,
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::{error::FetchError, state::DirectoryState};

pub const CUSTOMERS_PATH: &str = "/api/customers";

#[derive(Debug, Clone)]
pub struct CustomerDirectoryClient {
    client: Client,
    endpoint: String,
    state: Arc<RwLock<DirectoryState>>,
    initialized: Arc<AtomicBool>,
}

impl CustomerDirectoryClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(client: Client, base_url: impl AsRef<str>) -> Self {
        let endpoint = format!(
            "{}{}",
            base_url.as_ref().trim_end_matches('/'),
            CUSTOMERS_PATH
        );
        CustomerDirectoryClient {
            client,
            endpoint,
            state: Arc::new(RwLock::new(DirectoryState::default())),
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::transport)?;
        Ok(Self::with_http_client(client, &config.api_base_url))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Performs the initial load. Only the first call on a client (or any of
    /// its clones) reaches the network.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            debug!(url = %self.endpoint, "Directory already initialized, skipping fetch");
            return;
        }
        self.fetch_customers().await;
    }

    /// Loads the customer collection from the service.
    ///
    /// Failures never escape: they are logged and kept in `last_error`, and
    /// the collection keeps whatever it held before the call. `loading` is
    /// cleared in the same write that publishes the outcome, or by the guard
    /// if the future is dropped before it settles.
    pub async fn fetch_customers(&self) {
        self.state.write().await.loading = true;
        let guard = LoadingGuard::arm(self.state.clone());

        let outcome = self.request_customers().await;

        let mut state = self.state.write().await;
        match outcome {
            Ok(customers) => {
                info!(url = %self.endpoint, count = customers.len(), "Loaded customers");
                state.customers = customers;
                state.last_error = None;
            }
            Err(err) => {
                error!(
                    url = %self.endpoint,
                    kind = err.kind(),
                    error = %err,
                    "Error fetching customer data"
                );
                state.last_error = Some(err);
            }
        }
        state.loading = false;
        guard.disarm();
    }

    async fn request_customers(&self) -> Result<Vec<Customer>, FetchError> {
        debug!(url = %self.endpoint, "Requesting customers");
        let response = self
            .client
            .get(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::transport)?;
        let envelope: CustomersEnvelope =
            serde_json::from_slice(&body).map_err(FetchError::payload)?;
        debug!(status = %status, bytes = body.len(), "Customer payload received");

        envelope.into_customers().map_err(FetchError::payload)
    }

    /// Replaces the selection. The customer does not have to be part of the
    /// loaded collection; `None` clears it.
    pub async fn select_customer(&self, customer: Option<Customer>) {
        self.state.write().await.selection = customer;
    }

    pub async fn customers(&self) -> Vec<Customer> {
        self.state.read().await.customers.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn selected(&self) -> Option<Customer> {
        self.state.read().await.selection.clone()
    }

    pub async fn last_error(&self) -> Option<FetchError> {
        self.state.read().await.last_error.clone()
    }

    pub async fn snapshot(&self) -> DirectoryState {
        self.state.read().await.clone()
    }
}

/// Clears `loading` when a fetch is dropped mid-flight.
struct LoadingGuard {
    state: Option<Arc<RwLock<DirectoryState>>>,
}

impl LoadingGuard {
    fn arm(state: Arc<RwLock<DirectoryState>>) -> Self {
        Self { state: Some(state) }
    }

    fn disarm(mut self) {
        self.state = None;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let Some(state) = self.state.take() else {
            return;
        };
        warn!("Customer fetch cancelled before it settled");
        if let Ok(mut state) = state.try_write() {
            state.loading = false;
            return;
        }
        // Lock is busy: finish the reset on the runtime.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                state.write().await.loading = false;
            });
        }
    }
}
