// web_app/components/search.rs - Search controls of the product listing
//
// - ProductSearchBar: key/name input, product type filter, search and clear
// - TypeSelect: product type <select>, also used by the product form

use leptos::prelude::*;
use crate::web_app::model::{ProductListing, TypeProduct};

/// Search bar component with key input and type filter
///
/// Edits the listing filters in place; the page decides what a search does.
#[component]
pub fn ProductSearchBar(
    /// Current filters
    listing: RwSignal<ProductListing>,
    /// Product types offered by the filter
    types: Signal<Vec<TypeProduct>>,
    /// Callback when search is triggered
    on_search: Callback<()>,
    /// Callback when filters are cleared
    on_clear: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    let selected_type = Signal::derive(move || listing.with(|l| l.type_filter));

    view! {
        <form on:submit=on_submit class="w-full">
            <div class="flex flex-col md:flex-row gap-4">
                <div class="relative flex-1">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="text"
                        placeholder="Search by key or name..."
                        class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                               outline-none text-lg transition-all shadow-sm uppercase"
                        prop:value=move || listing.with(|l| l.key_filter.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            listing.update(|l| l.key_filter = value);
                        }
                    />
                </div>
                <div class="md:w-64">
                    <TypeSelect
                        types=types
                        selected=selected_type
                        placeholder="All types"
                        on_change=Callback::new(move |raw: String| {
                            listing.update(|l| l.set_type_filter(&raw));
                        })
                    />
                </div>
                <button
                    type="submit"
                    class="px-8 py-3 bg-blue-600 text-white rounded-xl \
                           hover:bg-blue-700 active:bg-blue-800 transition-all \
                           font-semibold shadow-md hover:shadow-lg"
                >
                    "Search"
                </button>
                <button
                    type="button"
                    class="px-6 py-3 bg-white text-gray-700 rounded-xl border border-gray-300 \
                           hover:bg-gray-50 transition-colors font-medium"
                    on:click=move |_| on_clear.run(())
                >
                    "Clear"
                </button>
            </div>
        </form>
    }
}

/// Product type selector
///
/// Emits the raw option value; an empty string is the placeholder option.
#[component]
pub fn TypeSelect(
    types: Signal<Vec<TypeProduct>>,
    /// Currently selected type id
    selected: Signal<Option<i64>>,
    #[prop(default = "Select a type")]
    placeholder: &'static str,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="w-full px-4 py-3 border-2 border-gray-200 rounded-xl bg-white \
                   focus:ring-4 focus:ring-blue-100 focus:border-blue-500 outline-none"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" selected=move || selected.get().is_none()>{placeholder}</option>
            <For
                each=move || types.get()
                key=|t| t.id_type_product
                children=move |t| {
                    let id = t.id_type_product;
                    view! {
                        <option value=id.to_string() selected=move || selected.get() == Some(id)>
                            {t.type_product_name}
                        </option>
                    }
                }
            />
        </select>
    }
}
