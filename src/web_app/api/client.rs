// web_app/api/client.rs - reqwest client for the inventory API
//
// One process-wide client is set up at start-up; server functions fetch it
// with `get_client`. Tests can swap in a client pointed at a mock server.

use std::sync::{Mutex, OnceLock};

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::ApiConfig;
use crate::web_app::model::*;
use crate::web_app::workflow::InventoryApi;

static CLIENT: OnceLock<ApiClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<ApiClient>> = Mutex::new(None);

/// Initialize the global API client
pub fn init_client(client: ApiClient) {
    tracing::info!("Initializing global inventory API client");
    if CLIENT.set(client).is_err() {
        tracing::warn!("Inventory API client already initialized");
    } else {
        tracing::info!("Global inventory API client initialized successfully");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: ApiClient) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// Get the global API client
pub fn get_client() -> Option<ApiClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global inventory API client is empty!");
    }
    client
}

/// Client for the inventory API. Cloning shares the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { http, config }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.get(self.config.endpoint(path));
        self.send(path, request).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.config.endpoint(path)).json(body);
        self.send(path, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        tracing::debug!("Calling inventory API {}", path);
        let response = request.send().await.map_err(|e| ApiError::Transport {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let envelope: Envelope = response.json().await.map_err(|e| ApiError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;
        envelope.into_result(path)
    }
}

impl InventoryApi for ApiClient {
    async fn type_products(&self) -> Result<Vec<TypeProduct>, ApiError> {
        self.get("/typeProducts").await
    }

    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/getAll").await
    }

    async fn product_by_id(&self, id_product: i64) -> Result<Product, ApiError> {
        self.post("/findById", &ProductIdRequest { id_product }).await
    }

    async fn suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        self.get("/suppliers").await
    }

    async fn create_product(&self, product: Product) -> Result<Product, ApiError> {
        self.post("/create", &product).await
    }

    async fn update_product(&self, product: Product) -> Result<Product, ApiError> {
        self.post("/update", &product).await
    }

    async fn delete_product(&self, id_product: i64) -> Result<serde_json::Value, ApiError> {
        self.post("/delete", &ProductIdRequest { id_product }).await
    }

    async fn add_suppliers_to_product(
        &self,
        suppliers: Vec<SupplierProduct>,
    ) -> Result<serde_json::Value, ApiError> {
        self.post("/addProductToSupplier", &suppliers).await
    }

    async fn update_suppliers_of_product(
        &self,
        suppliers: Vec<SupplierProduct>,
    ) -> Result<serde_json::Value, ApiError> {
        self.post("/uploadProductToSupplier", &suppliers).await
    }

    async fn suppliers_of_product(
        &self,
        id_product: i64,
    ) -> Result<Vec<SupplierProduct>, ApiError> {
        self.post("/getSuppliersProducts", &ProductIdRequest { id_product })
            .await
    }

    async fn search_products(&self, criteria: SearchCriteria) -> Result<Vec<Product>, ApiError> {
        self.post("/searchBykeyAndTypeProduct", &criteria).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_api_is_a_transport_error() {
        let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9/products"));
        let err = client.products().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { ref endpoint, .. } if endpoint == "/getAll"));
    }
}
