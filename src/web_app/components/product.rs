// web_app/components/product.rs - Product display and entry components
//
// - ProductTable: listing rows with edit/delete actions
// - ProductFields: name, price, key, type and status inputs of the form

use leptos::prelude::*;
use crate::web_app::model::{Product, ProductEditor, TypeProduct};
use super::common::{Badge, PriceDisplay};
use super::search::TypeSelect;

/// Products table
///
/// Shows key, name, price, type and status for each product with edit and
/// delete actions. Products without an id cannot be acted on and are
/// skipped.
#[component]
pub fn ProductTable(
    products: Signal<Vec<Product>>,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let rows = move || {
        products
            .get()
            .into_iter()
            .filter_map(|p| p.id_product.map(|id| (id, p)))
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !products.with(|p| p.is_empty())
            fallback=|| view! {
                <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                    <div class="text-gray-300 text-6xl mb-4">"📦"</div>
                    <h3 class="text-xl font-bold text-gray-900 mb-2">"No products found"</h3>
                    <p class="text-gray-500">"Try another key or product type."</p>
                </div>
            }
        >
            <div class="overflow-x-auto bg-white rounded-2xl shadow-sm border border-gray-100">
                <table class="min-w-full text-sm">
                    <thead class="bg-gray-50 text-left text-xs font-semibold text-gray-500 uppercase tracking-wider">
                        <tr>
                            <th class="px-4 py-3">"Key"</th>
                            <th class="px-4 py-3">"Name"</th>
                            <th class="px-4 py-3">"Price"</th>
                            <th class="px-4 py-3">"Type"</th>
                            <th class="px-4 py-3">"Status"</th>
                            <th class="px-4 py-3 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=rows
                            key=|(id, _)| *id
                            children=move |(id, product)| {
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-4 py-3 font-mono">{product.key}</td>
                                        <td class="px-4 py-3 font-medium text-gray-900">{product.product_name}</td>
                                        <td class="px-4 py-3"><PriceDisplay price=product.price /></td>
                                        <td class="px-4 py-3 text-gray-600">{product.type_product.type_product_name}</td>
                                        <td class="px-4 py-3">
                                            {if product.product_status {
                                                view! { <Badge variant="green">"Active"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge variant="red">"Inactive"</Badge> }.into_any()
                                            }}
                                        </td>
                                        <td class="px-4 py-3 text-right whitespace-nowrap">
                                            <button
                                                class="text-blue-600 hover:text-blue-800 font-medium mr-4"
                                                on:click=move |_| on_edit.run(id)
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="text-red-600 hover:text-red-800 font-medium"
                                                on:click=move |_| on_delete.run(id)
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-2 border-2 border-gray-200 rounded-lg \
                           focus:ring-4 focus:ring-blue-100 focus:border-blue-500 outline-none";

/// Product attribute inputs bound to the editor state
#[component]
pub fn ProductFields(editor: RwSignal<ProductEditor>) -> impl IntoView {
    let types = Signal::derive(move || editor.with(|e| e.types().to_vec()));
    let selected_type = Signal::derive(move || {
        editor.with(|e| e.product.type_product.as_ref().map(|t| t.id_type_product))
    });

    let on_type_change = Callback::new(move |raw: String| {
        editor.update(|e| {
            let chosen: Option<TypeProduct> = raw
                .parse::<i64>()
                .ok()
                .and_then(|id| e.types().iter().find(|t| t.id_type_product == id).cloned());
            e.product.type_product = chosen;
        });
    });

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Name"</span>
                <input
                    type="text"
                    class=format!("{} uppercase", INPUT_CLASS)
                    prop:value=move || editor.with(|e| e.product.product_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editor.update(|e| e.product.product_name = value);
                    }
                />
            </label>
            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Price"</span>
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    class=INPUT_CLASS
                    prop:value=move || editor.with(|e| e.product.price.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editor.update(|e| e.product.price = value);
                    }
                />
            </label>
            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Key"</span>
                <input
                    type="text"
                    class=format!("{} uppercase font-mono", INPUT_CLASS)
                    prop:value=move || editor.with(|e| e.product.product_key.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editor.update(|e| e.product.product_key = value);
                    }
                />
            </label>
            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Type"</span>
                <TypeSelect types=types selected=selected_type on_change=on_type_change />
            </label>
            <label class="flex items-center gap-3 cursor-pointer">
                <input
                    type="checkbox"
                    class="w-5 h-5 rounded border-gray-300 text-blue-600"
                    prop:checked=move || editor.with(|e| e.product.product_status)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        editor.update(|e| e.product.product_status = checked);
                    }
                />
                <span class="text-sm font-medium text-gray-700">"Active"</span>
            </label>
        </div>
    }
}
