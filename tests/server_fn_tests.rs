// tests/server_fn_tests.rs
// Test suite for Leptos server functions: each one forwards to the global
// API client, which is pointed at a mock inventory API.

mod common;

use common::{ok, product_json, rejected, start_mock_api};
use inventory_web::web_app::api::{set_test_client, ApiClient, ApiConfig};
use inventory_web::web_app::model::*;
use inventory_web::web_app::server_fns::*;
use inventory_web::web_app::workflow::{self, SAVE_OK};
use serde_json::json;

#[actix_web::test]
async fn test_server_functions_comprehensive() -> anyhow::Result<()> {
    let mock = start_mock_api(vec![
        ("/typeProducts", ok(json!([{ "idTypeProduct": 1, "typeProductName": "Hardware" }]))),
        ("/getAll", ok(json!([product_json(100, "WIDGET", "WID-001", 12.5, 1)]))),
        ("/findById", ok(product_json(100, "WIDGET", "WID-001", 12.5, 1))),
        ("/suppliers", ok(json!([{ "idSupplier": 10, "supplierName": "ACME" }]))),
        ("/create", ok(product_json(1001, "GADGET", "GAD-001", 5.25, 1))),
        ("/addProductToSupplier", ok(json!("added"))),
        ("/getSuppliersProducts", ok(json!([]))),
        ("/searchBykeyAndTypeProduct", ok(json!([product_json(100, "WIDGET", "WID-001", 12.5, 1)]))),
        ("/delete", rejected()),
    ])
    .await;
    set_test_client(ApiClient::new(ApiConfig::new(mock.base_url.clone())));

    // 1. Reference data
    println!("Testing get_type_products and get_suppliers...");
    let types = get_type_products().await
        .map_err(|e| anyhow::anyhow!("get_type_products failed: {}", e))?;
    assert_eq!(types.len(), 1);
    let suppliers = get_suppliers().await
        .map_err(|e| anyhow::anyhow!("get_suppliers failed: {}", e))?;
    assert_eq!(suppliers[0].id_supplier, 10);

    // 2. Products
    println!("Testing get_products and get_product...");
    let products = get_products().await
        .map_err(|e| anyhow::anyhow!("get_products failed: {}", e))?;
    assert_eq!(products.len(), 1);
    let product = get_product(100).await
        .map_err(|e| anyhow::anyhow!("get_product failed: {}", e))?;
    assert_eq!(product.key, "WID-001");

    // 3. Search
    println!("Testing search_products...");
    let found = search_products(SearchCriteria {
        key: Some("WID".to_string()),
        type_product_id: None,
    })
    .await
    .map_err(|e| anyhow::anyhow!("search_products failed: {}", e))?;
    assert_eq!(found[0].id_product, Some(100));
    assert_eq!(mock.last_request().body, json!({ "key": "WID", "typeProductId": null }));

    // 4. Associations of a product with none
    let associations = get_suppliers_of_product(100).await
        .map_err(|e| anyhow::anyhow!("get_suppliers_of_product failed: {}", e))?;
    assert!(associations.is_empty());

    // 5. Rejections surface as server function errors
    println!("Testing delete_product rejection...");
    let err = delete_product(100).await.unwrap_err();
    assert!(err.to_string().contains("/delete"));

    // 6. Unmocked endpoint maps to an HTTP status error
    let err = update_product(product.clone()).await.unwrap_err();
    assert!(err.to_string().contains("404"));

    // 7. Create workflow through the browser-side API
    println!("Testing create workflow through ServerFnApi...");
    let mut editor = ProductEditor::new(FormMode::Create);
    editor.set_types(types.clone());
    editor.set_catalog(suppliers.clone());
    editor.product.product_name = "gadget".to_string();
    editor.product.product_key = "gad-001".to_string();
    editor.product.price = "5.25".to_string();
    editor.product.type_product = Some(types[0].clone());
    editor.select_supplier(10);
    editor.supplier_form.product_key = "acme-gad".to_string();
    editor.supplier_form.cost = "3.10".to_string();
    editor.add_supplier()?;

    let outcome = workflow::submit_new_product(&ServerFnApi, &editor).await;
    assert_eq!(outcome.notices, vec![Notice::success(SAVE_OK)]);
    assert!(outcome.navigate);

    let request = mock.last_request();
    assert_eq!(request.path, "/addProductToSupplier");
    assert_eq!(request.body[0]["idProduct"], 1001);
    assert_eq!(request.body[0]["supplierProductKey"], "ACME-GAD");

    mock.stop().await;
    Ok(())
}
