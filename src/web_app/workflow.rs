// web_app/workflow.rs - Multi-step user actions against the inventory API
//
// The pages call these with whatever `InventoryApi` they have (server
// functions in the browser, the in-memory fixture in tests). Each function
// returns what the page must show and whether it should navigate away;
// none of them touch UI state directly.
//
// Ordering: a product write always completes before the association
// write that depends on it is issued.

use crate::web_app::model::*;

/// One async method per endpoint of the inventory API.
/// Delete and the bulk association writes answer with an acknowledgement
/// that is logged but never interpreted; only the envelope's `ok` counts.
#[allow(async_fn_in_trait)]
pub trait InventoryApi {
    async fn type_products(&self) -> Result<Vec<TypeProduct>, ApiError>;
    async fn products(&self) -> Result<Vec<Product>, ApiError>;
    async fn product_by_id(&self, id_product: i64) -> Result<Product, ApiError>;
    async fn suppliers(&self) -> Result<Vec<Supplier>, ApiError>;
    async fn create_product(&self, product: Product) -> Result<Product, ApiError>;
    async fn update_product(&self, product: Product) -> Result<Product, ApiError>;
    async fn delete_product(&self, id_product: i64) -> Result<serde_json::Value, ApiError>;
    async fn add_suppliers_to_product(
        &self,
        suppliers: Vec<SupplierProduct>,
    ) -> Result<serde_json::Value, ApiError>;
    async fn update_suppliers_of_product(
        &self,
        suppliers: Vec<SupplierProduct>,
    ) -> Result<serde_json::Value, ApiError>;
    async fn suppliers_of_product(&self, id_product: i64)
        -> Result<Vec<SupplierProduct>, ApiError>;
    async fn search_products(&self, criteria: SearchCriteria) -> Result<Vec<Product>, ApiError>;
}

pub const SAVE_OK: &str = "Saved successfully";
pub const SAVE_FAILED: &str = "Save failed";
pub const EDIT_OK: &str = "Edit successful";
pub const EDIT_FAILED: &str = "Edit failed";
pub const SUPPLIERS_OK: &str = "Suppliers updated";
pub const SUPPLIERS_FAILED: &str = "Supplier update failed";
pub const DELETE_OK: &str = "Product deleted";
pub const DELETE_FAILED: &str = "Delete product failed";

/// Result of a create or edit submission
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitOutcome {
    /// Dialogs to show, in order
    pub notices: Vec<Notice>,
    /// Go back to the listing page
    pub navigate: bool,
    /// Product as the server returned it
    pub product: Option<Product>,
}

impl SubmitOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            notices: vec![Notice::error(message)],
            ..Self::default()
        }
    }
}

/// Result of a delete
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteOutcome {
    pub notice: Notice,
    /// Reload the full product list
    pub reload: bool,
}

/// Reads that fail are logged and leave the view with empty data
pub fn or_logged<T: Default>(what: &str, result: Result<T, ApiError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to load {}: {}", what, e);
        T::default()
    })
}

pub async fn search<A: InventoryApi>(
    api: &A,
    listing: &ProductListing,
) -> Result<Vec<Product>, ApiError> {
    let criteria = listing.search_criteria();
    tracing::info!("Searching products: {:?}", criteria);
    let result = api.search_products(criteria).await;
    if let Err(e) = &result {
        tracing::error!("Search failed: {}", e);
    }
    result
}

/// Search results to show after searching with `listing`. A failed search
/// keeps `shown`, whatever the list held before.
pub async fn search_or_keep<A: InventoryApi>(
    api: &A,
    listing: &ProductListing,
    shown: Option<Vec<Product>>,
) -> Option<Vec<Product>> {
    match search(api, listing).await {
        Ok(found) => Some(found),
        Err(_) => shown,
    }
}

pub async fn delete_product<A: InventoryApi>(api: &A, id_product: i64) -> DeleteOutcome {
    match api.delete_product(id_product).await {
        Ok(status) => {
            tracing::info!("Deleted product {}: {}", id_product, status);
            DeleteOutcome {
                notice: Notice::success(DELETE_OK),
                reload: true,
            }
        }
        Err(e) => {
            tracing::error!("Delete of product {} failed: {}", id_product, e);
            DeleteOutcome {
                notice: Notice::error(DELETE_FAILED),
                reload: false,
            }
        }
    }
}

/// Fetch a product and then its associations. A failed association fetch
/// still returns the product, with no associations.
pub async fn load_product_for_edit<A: InventoryApi>(
    api: &A,
    id_product: i64,
) -> Result<(Product, Vec<SupplierProduct>), ApiError> {
    let product = api.product_by_id(id_product).await.map_err(|e| {
        tracing::error!("Failed to load product {}: {}", id_product, e);
        e
    })?;
    let id = product.id_product.unwrap_or(id_product);
    let suppliers = or_logged("product suppliers", api.suppliers_of_product(id).await)
        .into_iter()
        .map(SupplierProduct::denormalize)
        .collect();
    Ok((product, suppliers))
}

/// Create the product, then attach every association in the working list.
/// Navigation happens only when both steps succeed. A product whose
/// associations fail to save stays persisted.
pub async fn submit_new_product<A: InventoryApi>(api: &A, editor: &ProductEditor) -> SubmitOutcome {
    let product = match editor.product_payload() {
        Ok(product) => product,
        Err(e) => return SubmitOutcome::failed(e.to_string()),
    };

    let created = match api.create_product(product).await {
        Ok(created) => created,
        Err(e) => {
            tracing::error!("Create product failed: {}", e);
            return SubmitOutcome::failed(SAVE_FAILED);
        }
    };
    let Some(id_product) = created.id_product else {
        tracing::error!("Created product came back without an id");
        return SubmitOutcome::failed(SAVE_FAILED);
    };

    let payload = editor.suppliers().creation_payload(id_product);
    tracing::info!("Adding {} suppliers to product {}", payload.len(), id_product);
    let saved = match api.add_suppliers_to_product(payload).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Adding suppliers to product {} failed: {}", id_product, e);
            false
        }
    };

    SubmitOutcome {
        notices: vec![if saved {
            Notice::success(SAVE_OK)
        } else {
            Notice::error(SAVE_FAILED)
        }],
        navigate: saved,
        product: Some(created),
    }
}

/// Update the product, then send kept and removed associations in one
/// bulk update. Once the product update succeeds the user is sent back to
/// the listing whatever the association update does.
pub async fn submit_product_edit<A: InventoryApi>(api: &A, editor: &ProductEditor) -> SubmitOutcome {
    let product = match editor.product_payload() {
        Ok(product) => product,
        Err(e) => return SubmitOutcome::failed(e.to_string()),
    };
    let requested_id = product.id_product;

    let updated = match api.update_product(product).await {
        Ok(updated) => updated,
        Err(e) => {
            tracing::error!("Update product failed: {}", e);
            return SubmitOutcome::failed(EDIT_FAILED);
        }
    };
    let mut notices = vec![Notice::success(EDIT_OK)];

    match updated.id_product.or(requested_id) {
        Some(id_product) => {
            let payload = editor.suppliers().edit_payload(id_product);
            tracing::info!("Updating {} suppliers of product {}", payload.len(), id_product);
            match api.update_suppliers_of_product(payload).await {
                Ok(_) => notices.push(Notice::success(SUPPLIERS_OK)),
                Err(e) => {
                    tracing::error!("Updating suppliers of product {} failed: {}", id_product, e);
                    notices.push(Notice::error(SUPPLIERS_FAILED));
                }
            }
        }
        None => {
            tracing::error!("Updated product has no id, suppliers not sent");
            notices.push(Notice::error(SUPPLIERS_FAILED));
        }
    }

    SubmitOutcome {
        notices,
        navigate: true,
        product: Some(updated),
    }
}
