// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation, forwarding to the
//   inventory API through the global `ApiClient`
// - On client: A stub that makes HTTP POST requests to the server
//
// Bodies are JSON encoded since products and supplier lists are nested.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::web_app::model::*;
use crate::web_app::workflow::InventoryApi;

#[cfg(feature = "ssr")]
fn client() -> Result<crate::web_app::api::ApiClient, ServerFnError> {
    crate::web_app::api::get_client()
        .ok_or_else(|| ServerFnError::new("Inventory API client not available"))
}

#[cfg(feature = "ssr")]
fn forward<T>(what: &str, result: Result<T, ApiError>) -> Result<T, ServerFnError> {
    result.map_err(|e| {
        tracing::error!("{} failed: {}", what, e);
        ServerFnError::new(e.to_string())
    })
}

#[server(name = GetTypeProducts, prefix = "/api", input = Json)]
pub async fn get_type_products() -> Result<Vec<TypeProduct>, ServerFnError> {
    forward("List product types", client()?.type_products().await)
}

#[server(name = GetProducts, prefix = "/api", input = Json)]
pub async fn get_products() -> Result<Vec<Product>, ServerFnError> {
    forward("List products", client()?.products().await)
}

#[server(name = GetProduct, prefix = "/api", input = Json)]
pub async fn get_product(id_product: i64) -> Result<Product, ServerFnError> {
    forward("Find product", client()?.product_by_id(id_product).await)
}

#[server(name = GetSuppliers, prefix = "/api", input = Json)]
pub async fn get_suppliers() -> Result<Vec<Supplier>, ServerFnError> {
    forward("List suppliers", client()?.suppliers().await)
}

#[server(name = CreateProduct, prefix = "/api", input = Json)]
pub async fn create_product(product: Product) -> Result<Product, ServerFnError> {
    tracing::info!("Create product request: key='{}'", product.key);
    forward("Create product", client()?.create_product(product).await)
}

#[server(name = UpdateProduct, prefix = "/api", input = Json)]
pub async fn update_product(product: Product) -> Result<Product, ServerFnError> {
    tracing::info!("Update product request: id={:?}", product.id_product);
    forward("Update product", client()?.update_product(product).await)
}

#[server(name = DeleteProduct, prefix = "/api", input = Json)]
pub async fn delete_product(id_product: i64) -> Result<serde_json::Value, ServerFnError> {
    tracing::info!("Delete product request: id={}", id_product);
    forward("Delete product", client()?.delete_product(id_product).await)
}

#[server(name = AddSuppliersToProduct, prefix = "/api", input = Json)]
pub async fn add_suppliers_to_product(
    suppliers: Vec<SupplierProduct>,
) -> Result<serde_json::Value, ServerFnError> {
    forward(
        "Add suppliers to product",
        client()?.add_suppliers_to_product(suppliers).await,
    )
}

#[server(name = UpdateSuppliersOfProduct, prefix = "/api", input = Json)]
pub async fn update_suppliers_of_product(
    suppliers: Vec<SupplierProduct>,
) -> Result<serde_json::Value, ServerFnError> {
    forward(
        "Update suppliers of product",
        client()?.update_suppliers_of_product(suppliers).await,
    )
}

#[server(name = GetSuppliersOfProduct, prefix = "/api", input = Json)]
pub async fn get_suppliers_of_product(
    id_product: i64,
) -> Result<Vec<SupplierProduct>, ServerFnError> {
    forward(
        "List suppliers of product",
        client()?.suppliers_of_product(id_product).await,
    )
}

#[server(name = SearchProducts, prefix = "/api", input = Json)]
pub async fn search_products(criteria: SearchCriteria) -> Result<Vec<Product>, ServerFnError> {
    tracing::info!("Search request: {:?}", criteria);
    forward("Search products", client()?.search_products(criteria).await)
}

pub fn from_server(e: ServerFnError) -> ApiError {
    ApiError::Server(e.to_string())
}

/// `InventoryApi` as seen from the browser: every call goes through a
/// server function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnApi;

impl InventoryApi for ServerFnApi {
    async fn type_products(&self) -> Result<Vec<TypeProduct>, ApiError> {
        get_type_products().await.map_err(from_server)
    }

    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        get_products().await.map_err(from_server)
    }

    async fn product_by_id(&self, id_product: i64) -> Result<Product, ApiError> {
        get_product(id_product).await.map_err(from_server)
    }

    async fn suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        get_suppliers().await.map_err(from_server)
    }

    async fn create_product(&self, product: Product) -> Result<Product, ApiError> {
        create_product(product).await.map_err(from_server)
    }

    async fn update_product(&self, product: Product) -> Result<Product, ApiError> {
        update_product(product).await.map_err(from_server)
    }

    async fn delete_product(&self, id_product: i64) -> Result<serde_json::Value, ApiError> {
        delete_product(id_product).await.map_err(from_server)
    }

    async fn add_suppliers_to_product(
        &self,
        suppliers: Vec<SupplierProduct>,
    ) -> Result<serde_json::Value, ApiError> {
        add_suppliers_to_product(suppliers).await.map_err(from_server)
    }

    async fn update_suppliers_of_product(
        &self,
        suppliers: Vec<SupplierProduct>,
    ) -> Result<serde_json::Value, ApiError> {
        update_suppliers_of_product(suppliers)
            .await
            .map_err(from_server)
    }

    async fn suppliers_of_product(
        &self,
        id_product: i64,
    ) -> Result<Vec<SupplierProduct>, ApiError> {
        get_suppliers_of_product(id_product).await.map_err(from_server)
    }

    async fn search_products(&self, criteria: SearchCriteria) -> Result<Vec<Product>, ApiError> {
        search_products(criteria).await.map_err(from_server)
    }
}
