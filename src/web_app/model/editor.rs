// web_app/model/editor.rs - State of the add/edit product page
//
// Every user action on the page is a method here; the Leptos page only
// holds a signal around a `ProductEditor` and shows what it exposes.

use super::forms::{FormError, ProductForm, SupplierForm};
use super::suppliers::{Removal, SupplierList};
use super::{Product, Supplier, SupplierProduct, TypeProduct};

/// Whether the page creates a product or edits an existing one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// Edit mode when the route carried a product id. `None` when the id
    /// is present but not a number; the page sends that back to the listing.
    pub fn from_route_param(id: Option<&str>) -> Option<Self> {
        match id {
            None => Some(FormMode::Create),
            Some(raw) => raw.parse::<i64>().ok().map(FormMode::Edit),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Save",
            FormMode::Edit(_) => "Edit",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductEditor {
    mode: FormMode,
    pub product: ProductForm,
    pub supplier_form: SupplierForm,
    suppliers: SupplierList,
    types: Vec<TypeProduct>,
    catalog: Vec<Supplier>,
}

impl ProductEditor {
    pub fn new(mode: FormMode) -> Self {
        let suppliers = match mode {
            FormMode::Create => SupplierList::for_new_product(),
            FormMode::Edit(_) => SupplierList::for_existing_product(Vec::new()),
        };
        Self {
            mode,
            product: ProductForm::default(),
            supplier_form: SupplierForm::default(),
            suppliers,
            types: Vec::new(),
            catalog: Vec::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn suppliers(&self) -> &SupplierList {
        &self.suppliers
    }

    pub fn types(&self) -> &[TypeProduct] {
        &self.types
    }

    pub fn catalog(&self) -> &[Supplier] {
        &self.catalog
    }

    pub fn set_types(&mut self, types: Vec<TypeProduct>) {
        self.types = types;
    }

    pub fn set_catalog(&mut self, catalog: Vec<Supplier>) {
        self.catalog = catalog;
    }

    /// Populate the product form from the product being edited
    pub fn load_product(&mut self, product: &Product) {
        if let Some(id) = product.id_product {
            self.mode = FormMode::Edit(id);
        }
        self.product.fill(product, &self.types);
    }

    /// Install the associations the server has for the product
    pub fn load_suppliers(&mut self, persisted: Vec<SupplierProduct>) {
        let persisted = persisted
            .into_iter()
            .map(SupplierProduct::denormalize)
            .collect();
        self.suppliers = SupplierList::for_existing_product(persisted);
    }

    pub fn select_supplier(&mut self, id_supplier: i64) {
        if self.supplier_form.supplier_locked() {
            return;
        }
        self.supplier_form.supplier = self
            .catalog
            .iter()
            .find(|s| s.id_supplier == id_supplier)
            .cloned();
    }

    /// Append the association described by the sub-form, then reset it
    pub fn add_supplier(&mut self) -> Result<(), FormError> {
        let entry = self.supplier_form.to_entry()?;
        self.suppliers.add(entry);
        self.supplier_form.reset();
        Ok(())
    }

    /// Load an association into the sub-form and lock the supplier selector
    pub fn begin_supplier_edit(&mut self, id_supplier: i64) -> Result<(), FormError> {
        let entry = self
            .suppliers
            .find(id_supplier)
            .ok_or(FormError::UnknownSupplier(id_supplier))?
            .clone();
        let supplier = self
            .catalog
            .iter()
            .find(|s| s.id_supplier == id_supplier)
            .cloned();
        self.supplier_form.load(supplier, &entry);
        Ok(())
    }

    /// Write the sub-form's SKU and cost back onto the association being edited
    pub fn commit_supplier_edit(&mut self) -> Result<(), FormError> {
        let id_supplier = self.supplier_form.editing.ok_or(FormError::NotEditing)?;
        let (key, cost) = self.supplier_form.values()?;
        if !self.suppliers.update(id_supplier, key, cost) {
            return Err(FormError::UnknownSupplier(id_supplier));
        }
        self.supplier_form.editing = None;
        Ok(())
    }

    pub fn cancel_supplier_edit(&mut self) {
        self.supplier_form.reset();
    }

    pub fn remove_supplier(&mut self, id_supplier: i64) -> Option<Removal> {
        if self.supplier_form.editing == Some(id_supplier) {
            self.supplier_form.reset();
        }
        self.suppliers.remove(id_supplier)
    }

    /// Product to send to create or update
    pub fn product_payload(&self) -> Result<Product, FormError> {
        let id = match self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        };
        self.product.to_product(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mode_from_route_param() {
        assert_eq!(FormMode::from_route_param(None), Some(FormMode::Create));
        assert_eq!(FormMode::from_route_param(Some("12")), Some(FormMode::Edit(12)));
        assert_eq!(FormMode::from_route_param(Some("abc")), None);
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(FormMode::Create.submit_label(), "Save");
        assert_eq!(FormMode::Edit(1).submit_label(), "Edit");
    }

    #[test]
    fn test_commit_without_edit_fails() {
        let mut editor = ProductEditor::new(FormMode::Create);
        assert_eq!(editor.commit_supplier_edit(), Err(FormError::NotEditing));
    }

    #[test]
    fn test_select_supplier_ignored_while_locked() {
        let mut editor = ProductEditor::new(FormMode::Create);
        editor.set_catalog(vec![
            Supplier { id_supplier: 1, supplier_name: "A".to_string() },
            Supplier { id_supplier: 2, supplier_name: "B".to_string() },
        ]);
        editor.select_supplier(1);
        editor.supplier_form.editing = Some(1);
        editor.select_supplier(2);
        assert_eq!(editor.supplier_form.supplier.as_ref().map(|s| s.id_supplier), Some(1));
    }
}
