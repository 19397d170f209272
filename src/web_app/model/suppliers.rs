// web_app/model/suppliers.rs - Working list of supplier associations
//
// `active` is what the product currently has. `removed` only fills up in
// edit mode, with persisted associations the user detached; they are sent
// back to the server with their status set to false.

use rust_decimal::Decimal;

use super::SupplierProduct;

/// What `SupplierList::remove` did with the association
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    /// Never persisted (or create mode); dropped without bookkeeping
    Discarded,
    /// Queued for server-side deactivation
    Queued,
    /// A removal for this supplier is already queued
    AlreadyQueued,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupplierList {
    active: Vec<SupplierProduct>,
    removed: Vec<SupplierProduct>,
    track_removals: bool,
}

impl SupplierList {
    /// Empty list for a product that does not exist yet
    pub fn for_new_product() -> Self {
        Self::default()
    }

    /// List seeded with the associations the server already has
    pub fn for_existing_product(persisted: Vec<SupplierProduct>) -> Self {
        Self {
            active: persisted,
            removed: Vec::new(),
            track_removals: true,
        }
    }

    pub fn active(&self) -> &[SupplierProduct] {
        &self.active
    }

    pub fn removed(&self) -> &[SupplierProduct] {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn find(&self, id_supplier: i64) -> Option<&SupplierProduct> {
        self.active.iter().find(|sp| sp.id_supplier == id_supplier)
    }

    /// Append an association. Duplicate suppliers are not rejected.
    pub fn add(&mut self, entry: SupplierProduct) {
        self.active.push(entry);
    }

    /// Overwrite SKU and cost in place. Returns false when the supplier is
    /// not in the list.
    pub fn update(&mut self, id_supplier: i64, product_key: String, cost: Decimal) -> bool {
        match self.active.iter_mut().find(|sp| sp.id_supplier == id_supplier) {
            Some(entry) => {
                entry.supplier_product_key = product_key;
                entry.supplier_cost = cost;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id_supplier: i64) -> Option<Removal> {
        let index = self
            .active
            .iter()
            .position(|sp| sp.id_supplier == id_supplier)?;
        let mut entry = self.active.remove(index);

        if !self.track_removals || !entry.is_persisted() {
            return Some(Removal::Discarded);
        }
        if self.removed.iter().any(|sp| sp.id_supplier == entry.id_supplier) {
            return Some(Removal::AlreadyQueued);
        }

        entry.product_supplier_status = false;
        self.removed.push(entry);
        Some(Removal::Queued)
    }

    /// Payload for bulk-add after a product was created: every entry is
    /// tagged with the new id, unpersisted and active.
    pub fn creation_payload(&self, id_product: i64) -> Vec<SupplierProduct> {
        self.active
            .iter()
            .cloned()
            .map(|mut sp| {
                sp.id_product = Some(id_product);
                sp.id_product_supplier = None;
                sp.product_supplier_status = true;
                sp
            })
            .collect()
    }

    /// Payload for bulk-update after a product was edited: active entries
    /// then removed ones, each keeping its own association id and status.
    pub fn edit_payload(&self, id_product: i64) -> Vec<SupplierProduct> {
        self.active
            .iter()
            .chain(self.removed.iter())
            .cloned()
            .map(|mut sp| {
                sp.id_product = Some(id_product);
                sp
            })
            .collect()
    }
}
