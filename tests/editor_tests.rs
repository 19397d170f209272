// tests/editor_tests.rs - State of the add/edit product page
//
// Drives `ProductEditor` the way the page does: load reference data,
// fill the forms, add/edit/remove suppliers and build the payloads.

use inventory_web::fixtures::catalog::{self, ACME, BOLT_CO, HARDWARE, NORTHWIND, TOOLS, WIDGET};
use inventory_web::web_app::model::*;
use rust_decimal::Decimal;

fn create_editor() -> ProductEditor {
    let mut editor = ProductEditor::new(FormMode::Create);
    editor.set_types(catalog::type_products());
    editor.set_catalog(catalog::suppliers());
    editor
}

fn widget_editor() -> ProductEditor {
    let mut editor = ProductEditor::new(FormMode::Edit(WIDGET));
    editor.set_types(catalog::type_products());
    editor.set_catalog(catalog::suppliers());
    let widget = catalog::products()
        .into_iter()
        .find(|p| p.id_product == Some(WIDGET))
        .expect("widget in catalog");
    editor.load_product(&widget);
    editor.load_suppliers(catalog::associations());
    editor
}

fn fill_supplier(editor: &mut ProductEditor, id_supplier: i64, key: &str, cost: &str) {
    editor.select_supplier(id_supplier);
    editor.supplier_form.product_key = key.to_string();
    editor.supplier_form.cost = cost.to_string();
}

#[test]
fn test_mode_from_route_param() {
    assert_eq!(FormMode::from_route_param(None), Some(FormMode::Create));
    assert_eq!(FormMode::from_route_param(Some("42")), Some(FormMode::Edit(42)));
    // A malformed id never turns an edit URL into an add form
    assert_eq!(FormMode::from_route_param(Some("abc")), None);
    assert_eq!(FormMode::from_route_param(Some("")), None);
    assert_eq!(FormMode::Create.submit_label(), "Save");
    assert_eq!(FormMode::Edit(1).submit_label(), "Edit");
}

#[test]
fn test_new_product_defaults_to_active() {
    let editor = create_editor();
    assert!(editor.product.product_status);
    assert!(editor.suppliers().is_empty());
    assert!(!editor.supplier_form.is_editing());
}

#[test]
fn test_load_product_resolves_type_from_options() {
    let editor = widget_editor();

    assert_eq!(editor.product.product_name, "WIDGET");
    assert_eq!(editor.product.product_key, "WID-001");
    assert_eq!(editor.product.price, "12.50");
    let selected = editor.product.type_product.as_ref().expect("type resolved");
    assert_eq!(selected, &catalog::type_product(HARDWARE));
}

#[test]
fn test_load_suppliers_denormalizes_nested_records() {
    let editor = widget_editor();

    let active = editor.suppliers().active();
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].id_supplier, ACME);
    assert_eq!(active[0].supplier_name, "ACME");
    assert_eq!(active[0].id_product, Some(WIDGET));
    assert_eq!(active[1].id_supplier, BOLT_CO);
}

#[test]
fn test_add_supplier_resets_sub_form() {
    let mut editor = create_editor();
    fill_supplier(&mut editor, ACME, "a1", "1.00");

    editor.add_supplier().expect("valid entry");

    let active = editor.suppliers().active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].supplier_product_key, "A1");
    assert_eq!(active[0].supplier_cost, Decimal::new(100, 2));
    assert_eq!(editor.supplier_form, SupplierForm::default());
}

#[test]
fn test_add_supplier_requires_a_supplier_and_numeric_cost() {
    let mut editor = create_editor();
    editor.supplier_form.product_key = "A1".to_string();
    editor.supplier_form.cost = "1".to_string();
    assert_eq!(editor.add_supplier(), Err(FormError::Missing("supplier")));

    fill_supplier(&mut editor, ACME, "A1", "abc");
    assert!(matches!(
        editor.add_supplier(),
        Err(FormError::InvalidNumber { field: "cost", .. })
    ));

    fill_supplier(&mut editor, ACME, "A1", "-3");
    assert_eq!(editor.add_supplier(), Err(FormError::Negative("cost")));
    assert!(editor.suppliers().is_empty());
}

#[test]
fn test_supplier_edit_locks_selector_and_updates_in_place() {
    let mut editor = widget_editor();

    editor.begin_supplier_edit(BOLT_CO).expect("BOLT CO is active");
    assert!(editor.supplier_form.supplier_locked());
    assert_eq!(editor.supplier_form.product_key, "BC-77");
    assert_eq!(editor.supplier_form.cost, "9.10");

    // Selector is locked while editing
    editor.select_supplier(NORTHWIND);
    assert_eq!(
        editor.supplier_form.supplier.as_ref().map(|s| s.id_supplier),
        Some(BOLT_CO)
    );

    editor.supplier_form.product_key = "bc-78".to_string();
    editor.supplier_form.cost = "10".to_string();
    editor.commit_supplier_edit().expect("commit");

    assert!(!editor.supplier_form.is_editing());
    let entry = editor.suppliers().find(BOLT_CO).expect("still active");
    assert_eq!(entry.supplier_product_key, "BC-78");
    assert_eq!(entry.supplier_cost, Decimal::new(10, 0));
    assert_eq!(editor.suppliers().active().len(), 2);
}

#[test]
fn test_commit_without_edit_is_rejected() {
    let mut editor = widget_editor();
    assert_eq!(editor.commit_supplier_edit(), Err(FormError::NotEditing));
    assert_eq!(
        editor.begin_supplier_edit(NORTHWIND),
        Err(FormError::UnknownSupplier(NORTHWIND))
    );
}

#[test]
fn test_cancel_supplier_edit_leaves_list_untouched() {
    let mut editor = widget_editor();
    let before = editor.suppliers().clone();

    editor.begin_supplier_edit(ACME).expect("ACME is active");
    editor.supplier_form.cost = "99".to_string();
    editor.cancel_supplier_edit();

    assert!(!editor.supplier_form.supplier_locked());
    assert_eq!(editor.suppliers(), &before);
}

#[test]
fn test_removing_edited_supplier_resets_form() {
    let mut editor = widget_editor();
    editor.begin_supplier_edit(ACME).expect("ACME is active");

    assert_eq!(editor.remove_supplier(ACME), Some(Removal::Queued));
    assert!(!editor.supplier_form.is_editing());
    assert_eq!(editor.suppliers().removed().len(), 1);
}

#[test]
fn test_product_payload_carries_mode_id() {
    let mut editor = widget_editor();
    editor.product.product_name = "widget xl".to_string();
    editor.product.type_product = Some(catalog::type_product(TOOLS));

    let product = editor.product_payload().expect("valid product");
    assert_eq!(product.id_product, Some(WIDGET));
    assert_eq!(product.product_name, "WIDGET XL");
    assert_eq!(product.type_product.id_type_product, TOOLS);

    let mut editor = create_editor();
    editor.product.product_name = "Saw".to_string();
    editor.product.product_key = "saw-1".to_string();
    editor.product.price = "19.99".to_string();
    editor.product.type_product = Some(catalog::type_product(TOOLS));
    let product = editor.product_payload().expect("valid product");
    assert_eq!(product.id_product, None);
    assert_eq!(product.key, "SAW-1");
}

#[test]
fn test_product_payload_reports_missing_fields() {
    let mut editor = create_editor();
    assert_eq!(
        editor.product_payload(),
        Err(FormError::Missing("product name"))
    );

    editor.product.product_name = "Saw".to_string();
    editor.product.product_key = "SAW-1".to_string();
    editor.product.price = "19.99".to_string();
    assert_eq!(
        editor.product_payload(),
        Err(FormError::Missing("product type"))
    );
}
