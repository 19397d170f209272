// fixtures/inventory.rs
//
// In-memory inventory API. It keeps a tiny store, answers like the real
// server would, records every call and can be told to reject endpoints.

use std::cell::RefCell;

use super::catalog;
use crate::web_app::model::*;
use crate::web_app::workflow::InventoryApi;

/// A recorded call with the payload it carried
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    TypeProducts,
    Products,
    ProductById(i64),
    Suppliers,
    CreateProduct(Product),
    UpdateProduct(Product),
    DeleteProduct(i64),
    AddSuppliers(Vec<SupplierProduct>),
    UpdateSuppliers(Vec<SupplierProduct>),
    SuppliersOfProduct(i64),
    Search(SearchCriteria),
}

#[derive(Default)]
struct Store {
    types: Vec<TypeProduct>,
    suppliers: Vec<Supplier>,
    products: Vec<Product>,
    associations: Vec<SupplierProduct>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryInventory {
    store: RefCell<Store>,
    calls: RefCell<Vec<Call>>,
    failing: RefCell<Vec<&'static str>>,
}

impl InMemoryInventory {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store loaded with the sample catalog
    pub fn seeded() -> Self {
        let inventory = Self::new();
        {
            let mut store = inventory.store.borrow_mut();
            store.types = catalog::type_products();
            store.suppliers = catalog::suppliers();
            store.products = catalog::products();
            store.associations = catalog::associations();
            store.next_id = 1000;
        }
        inventory
    }

    /// Make every call to `endpoint` (e.g. "/create") answer `ok: false`
    pub fn fail_on(&self, endpoint: &'static str) {
        self.failing.borrow_mut().push(endpoint);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Associations stored for a product, including deactivated ones
    pub fn stored_associations(&self, id_product: i64) -> Vec<SupplierProduct> {
        self.store
            .borrow()
            .associations
            .iter()
            .filter(|sp| sp.product.as_ref().map(|p| p.id_product) == Some(id_product))
            .cloned()
            .collect()
    }

    pub fn stored_product(&self, id_product: i64) -> Option<Product> {
        self.store
            .borrow()
            .products
            .iter()
            .find(|p| p.id_product == Some(id_product))
            .cloned()
    }

    fn record(&self, endpoint: &'static str, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&endpoint) {
            return Err(ApiError::Rejected {
                endpoint: endpoint.to_string(),
            });
        }
        Ok(())
    }

    fn next_id(&self) -> i64 {
        let mut store = self.store.borrow_mut();
        store.next_id += 1;
        store.next_id
    }

    fn not_found(endpoint: &str) -> ApiError {
        ApiError::Rejected {
            endpoint: endpoint.to_string(),
        }
    }

    /// Stored form of an association: ids live on the nested objects
    fn to_stored(&self, sp: SupplierProduct, id_product_supplier: i64) -> SupplierProduct {
        let id_product = sp.id_product.unwrap_or_default();
        let supplier = Supplier {
            id_supplier: sp.id_supplier,
            supplier_name: sp.supplier_name.clone(),
        };
        SupplierProduct {
            id_supplier: 0,
            supplier_name: String::new(),
            id_product: None,
            id_product_supplier: Some(id_product_supplier),
            product: Some(ProductRef { id_product }),
            supplier: Some(supplier),
            ..sp
        }
    }
}

impl InventoryApi for InMemoryInventory {
    async fn type_products(&self) -> Result<Vec<TypeProduct>, ApiError> {
        self.record("/typeProducts", Call::TypeProducts)?;
        Ok(self.store.borrow().types.clone())
    }

    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.record("/getAll", Call::Products)?;
        Ok(self.store.borrow().products.clone())
    }

    async fn product_by_id(&self, id_product: i64) -> Result<Product, ApiError> {
        self.record("/findById", Call::ProductById(id_product))?;
        self.stored_product(id_product)
            .ok_or_else(|| Self::not_found("/findById"))
    }

    async fn suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        self.record("/suppliers", Call::Suppliers)?;
        Ok(self.store.borrow().suppliers.clone())
    }

    async fn create_product(&self, product: Product) -> Result<Product, ApiError> {
        self.record("/create", Call::CreateProduct(product.clone()))?;
        let created = Product {
            id_product: Some(self.next_id()),
            ..product
        };
        self.store.borrow_mut().products.push(created.clone());
        Ok(created)
    }

    async fn update_product(&self, product: Product) -> Result<Product, ApiError> {
        self.record("/update", Call::UpdateProduct(product.clone()))?;
        let mut store = self.store.borrow_mut();
        let slot = store
            .products
            .iter_mut()
            .find(|p| p.id_product.is_some() && p.id_product == product.id_product)
            .ok_or_else(|| Self::not_found("/update"))?;
        *slot = product.clone();
        Ok(product)
    }

    async fn delete_product(&self, id_product: i64) -> Result<serde_json::Value, ApiError> {
        self.record("/delete", Call::DeleteProduct(id_product))?;
        let mut store = self.store.borrow_mut();
        let before = store.products.len();
        store.products.retain(|p| p.id_product != Some(id_product));
        if store.products.len() == before {
            return Err(Self::not_found("/delete"));
        }
        Ok(serde_json::json!("deleted"))
    }

    async fn add_suppliers_to_product(
        &self,
        suppliers: Vec<SupplierProduct>,
    ) -> Result<serde_json::Value, ApiError> {
        self.record("/addProductToSupplier", Call::AddSuppliers(suppliers.clone()))?;
        for sp in suppliers {
            let id = self.next_id();
            let stored = self.to_stored(sp, id);
            self.store.borrow_mut().associations.push(stored);
        }
        Ok(serde_json::json!("added"))
    }

    async fn update_suppliers_of_product(
        &self,
        suppliers: Vec<SupplierProduct>,
    ) -> Result<serde_json::Value, ApiError> {
        self.record(
            "/uploadProductToSupplier",
            Call::UpdateSuppliers(suppliers.clone()),
        )?;
        for sp in suppliers {
            match sp.id_product_supplier {
                Some(id) => {
                    let stored = self.to_stored(sp, id);
                    let mut store = self.store.borrow_mut();
                    match store
                        .associations
                        .iter_mut()
                        .find(|a| a.id_product_supplier == Some(id))
                    {
                        Some(slot) => *slot = stored,
                        None => store.associations.push(stored),
                    }
                }
                None => {
                    let id = self.next_id();
                    let stored = self.to_stored(sp, id);
                    self.store.borrow_mut().associations.push(stored);
                }
            }
        }
        Ok(serde_json::json!("updated"))
    }

    async fn suppliers_of_product(
        &self,
        id_product: i64,
    ) -> Result<Vec<SupplierProduct>, ApiError> {
        self.record("/getSuppliersProducts", Call::SuppliersOfProduct(id_product))?;
        Ok(self
            .stored_associations(id_product)
            .into_iter()
            .filter(|sp| sp.product_supplier_status)
            .collect())
    }

    /// Matches the key filter against key or name, and the type by id
    async fn search_products(&self, criteria: SearchCriteria) -> Result<Vec<Product>, ApiError> {
        self.record("/searchBykeyAndTypeProduct", Call::Search(criteria.clone()))?;
        let store = self.store.borrow();
        Ok(store
            .products
            .iter()
            .filter(|p| match &criteria.key {
                Some(key) => p.key.contains(key.as_str()) || p.product_name.contains(key.as_str()),
                None => true,
            })
            .filter(|p| match criteria.type_product_id {
                Some(id) => p.type_product.id_type_product == id,
                None => true,
            })
            .cloned()
            .collect())
    }
}
