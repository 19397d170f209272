// fixtures/catalog.rs
//
// A small, fixed catalog: three product types, three suppliers and four
// products, one of which already has two suppliers attached.

use rust_decimal::Decimal;

use crate::web_app::model::{Product, ProductRef, Supplier, SupplierProduct, TypeProduct};

pub const HARDWARE: i64 = 1;
pub const TOOLS: i64 = 2;
pub const PAINT: i64 = 3;

pub const ACME: i64 = 10;
pub const BOLT_CO: i64 = 20;
pub const NORTHWIND: i64 = 30;

/// Product that starts with ACME and BOLT CO attached
pub const WIDGET: i64 = 100;

pub fn type_products() -> Vec<TypeProduct> {
    [(HARDWARE, "Hardware"), (TOOLS, "Tools"), (PAINT, "Paint")]
        .into_iter()
        .map(|(id, name)| TypeProduct {
            id_type_product: id,
            type_product_name: name.to_string(),
        })
        .collect()
}

pub fn type_product(id: i64) -> TypeProduct {
    type_products()
        .into_iter()
        .find(|t| t.id_type_product == id)
        .unwrap_or_default()
}

pub fn suppliers() -> Vec<Supplier> {
    [(ACME, "ACME"), (BOLT_CO, "BOLT CO"), (NORTHWIND, "NORTHWIND")]
        .into_iter()
        .map(|(id, name)| Supplier {
            id_supplier: id,
            supplier_name: name.to_string(),
        })
        .collect()
}

pub fn supplier(id: i64) -> Supplier {
    suppliers()
        .into_iter()
        .find(|s| s.id_supplier == id)
        .unwrap_or_default()
}

fn product(id: i64, name: &str, key: &str, cents: i64, type_id: i64) -> Product {
    Product {
        id_product: Some(id),
        product_name: name.to_string(),
        key: key.to_string(),
        price: Decimal::new(cents, 2),
        product_status: true,
        type_product: type_product(type_id),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(WIDGET, "WIDGET", "WID-001", 1250, HARDWARE),
        product(101, "WIDE HINGE", "WID-002", 475, HARDWARE),
        product(102, "HAMMER", "HAM-001", 2199, TOOLS),
        product(103, "WHITE PRIMER", "PRM-001", 3500, PAINT),
    ]
}

/// Association as the server returns it: ids only on the nested objects
pub fn persisted_association(
    id_product_supplier: i64,
    id_product: i64,
    id_supplier: i64,
    key: &str,
    cost: Decimal,
) -> SupplierProduct {
    SupplierProduct {
        id_supplier: 0,
        supplier_name: String::new(),
        id_product: None,
        id_product_supplier: Some(id_product_supplier),
        supplier_product_key: key.to_string(),
        supplier_cost: cost,
        product_supplier_status: true,
        product: Some(ProductRef { id_product }),
        supplier: Some(supplier(id_supplier)),
    }
}

pub fn associations() -> Vec<SupplierProduct> {
    vec![
        persisted_association(500, WIDGET, ACME, "ACME-WID", Decimal::new(800, 2)),
        persisted_association(501, WIDGET, BOLT_CO, "BC-77", Decimal::new(910, 2)),
    ]
}
