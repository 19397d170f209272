// web_app/components/supplier.rs - Supplier association components
//
// - SupplierSubForm: pick a supplier, enter its SKU and cost
// - SupplierTable: active associations of the product being edited

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::model::{ProductEditor, SupplierProduct};
use super::common::{Button, PriceDisplay, SecondaryButton};

const INPUT_CLASS: &str = "w-full px-4 py-2 border-2 border-gray-200 rounded-lg \
                           focus:ring-4 focus:ring-blue-100 focus:border-blue-500 outline-none";

/// Sub-form for one supplier association
///
/// While an association is being edited the supplier selector is locked and
/// the add button is replaced by save/cancel.
#[component]
pub fn SupplierSubForm(
    editor: RwSignal<ProductEditor>,
    on_add: Callback<()>,
    on_commit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let locked = Signal::derive(move || editor.with(|e| e.supplier_form.supplier_locked()));
    let selected = move || {
        editor.with(|e| e.supplier_form.supplier.as_ref().map(|s| s.id_supplier))
    };
    let catalog = move || editor.with(|e| e.catalog().to_vec());

    view! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end bg-gray-50 p-4 rounded-xl border border-gray-100">
            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Supplier"</span>
                <select
                    class=INPUT_CLASS
                    disabled=move || locked.get()
                    on:change=move |ev| {
                        if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                            editor.update(|e| e.select_supplier(id));
                        }
                    }
                >
                    <option value="" selected=move || selected().is_none()>"Select a supplier"</option>
                    <For
                        each=catalog
                        key=|s| s.id_supplier
                        children=move |s| {
                            let id = s.id_supplier;
                            view! {
                                <option value=id.to_string() selected=move || selected() == Some(id)>
                                    {s.supplier_name}
                                </option>
                            }
                        }
                    />
                </select>
            </label>
            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Supplier SKU"</span>
                <input
                    type="text"
                    class=format!("{} uppercase font-mono", INPUT_CLASS)
                    prop:value=move || editor.with(|e| e.supplier_form.product_key.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editor.update(|e| e.supplier_form.product_key = value);
                    }
                />
            </label>
            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Cost"</span>
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    class=INPUT_CLASS
                    prop:value=move || editor.with(|e| e.supplier_form.cost.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editor.update(|e| e.supplier_form.cost = value);
                    }
                />
            </label>
            <div class="flex gap-2">
                <Show
                    when=move || locked.get()
                    fallback=move || view! {
                        <Button on_click=on_add>"Add supplier"</Button>
                    }
                >
                    <Button on_click=on_commit>"Save"</Button>
                    <SecondaryButton on_click=on_cancel>"Cancel"</SecondaryButton>
                </Show>
            </div>
        </div>
    }
}

/// Position keeps duplicate entries apart; the rest re-renders a row
/// when its SKU or cost changes.
fn row_key(pos: usize, entry: &SupplierProduct) -> (usize, i64, String, Decimal) {
    (pos, entry.id_supplier, entry.supplier_product_key.clone(), entry.supplier_cost)
}

/// Active supplier associations
#[component]
pub fn SupplierTable(
    entries: Signal<Vec<SupplierProduct>>,
    on_edit: Callback<i64>,
    on_remove: Callback<i64>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !entries.with(|e| e.is_empty())
            fallback=|| view! {
                <p class="text-sm text-gray-500 py-4">"No suppliers assigned."</p>
            }
        >
            <table class="min-w-full text-sm mt-4">
                <thead class="text-left text-xs font-semibold text-gray-500 uppercase tracking-wider">
                    <tr>
                        <th class="px-4 py-2">"Supplier"</th>
                        <th class="px-4 py-2">"SKU"</th>
                        <th class="px-4 py-2">"Cost"</th>
                        <th class="px-4 py-2 text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    <For
                        each=move || entries.get().into_iter().enumerate()
                        key=|(pos, e)| row_key(*pos, e)
                        children=move |(_, entry)| {
                            let id = entry.id_supplier;
                            view! {
                                <tr>
                                    <td class="px-4 py-2 font-medium">{entry.supplier_name}</td>
                                    <td class="px-4 py-2 font-mono">{entry.supplier_product_key}</td>
                                    <td class="px-4 py-2"><PriceDisplay price=entry.supplier_cost /></td>
                                    <td class="px-4 py-2 text-right whitespace-nowrap">
                                        <button
                                            type="button"
                                            class="text-blue-600 hover:text-blue-800 font-medium mr-4"
                                            on:click=move |_| on_edit.run(id)
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            type="button"
                                            class="text-red-600 hover:text-red-800 font-medium"
                                            on:click=move |_| on_remove.run(id)
                                        >
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
