// web_app/pages/products.rs - Product listing page
//
// Shows every product, or the results of the last search until the
// filters are cleared. Deleting asks for confirmation and reloads the
// full list on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::ServerFnApi;
use crate::web_app::workflow::{self, or_logged, InventoryApi};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let notices = use_notice_queue();
    let navigate = StoredValue::new_local(use_navigate());

    let listing = RwSignal::new(ProductListing::default());
    // Bumped to refetch the unfiltered list
    let reload = RwSignal::new(0_u32);
    // Some while search results replace the full list
    let search_results = RwSignal::new(None::<Vec<Product>>);
    let pending = RwSignal::new(None::<PendingAction>);

    let types = Resource::new(
        || (),
        |_| async move { or_logged("product types", ServerFnApi.type_products().await) },
    );
    let all_products = Resource::new(
        move || reload.get(),
        |_| async move { or_logged("products", ServerFnApi.products().await) },
    );

    let type_options = Signal::derive(move || types.get().unwrap_or_default());
    let shown = Signal::derive(move || {
        search_results
            .get()
            .or_else(|| all_products.get())
            .unwrap_or_default()
    });

    let on_search = Callback::new(move |()| {
        let filters = listing.get_untracked();
        spawn_local(async move {
            let shown = search_results.get_untracked();
            let shown = workflow::search_or_keep(&ServerFnApi, &filters, shown).await;
            search_results.set(shown);
        });
    });

    let on_clear = Callback::new(move |()| {
        listing.update(|l| l.clear_search());
        search_results.set(None);
        reload.update(|r| *r += 1);
    });

    let go_to = move |route: AppRoute| {
        navigate.with_value(|nav| nav(route.path().as_str(), NavigateOptions::default()));
    };

    let on_edit = Callback::new(move |id: i64| go_to(AppRoute::EditProduct(id)));
    let on_add = move |_| go_to(AppRoute::AddProduct);

    let on_delete = Callback::new(move |id: i64| {
        pending.set(Some(PendingAction::DeleteProduct(id)));
    });

    let on_confirm = Callback::new(move |()| {
        if let Some(PendingAction::DeleteProduct(id)) = pending.get_untracked() {
            spawn_local(async move {
                let outcome = workflow::delete_product(&ServerFnApi, id).await;
                notices.push(outcome.notice);
                if outcome.reload {
                    search_results.set(None);
                    reload.update(|r| *r += 1);
                }
            });
        }
        pending.set(None);
    });

    let on_cancel = Callback::new(move |()| pending.set(None));

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                <ProductSearchBar
                    listing=listing
                    types=type_options
                    on_search=on_search
                    on_clear=on_clear
                />
            </section>

            <div class="flex justify-between items-center mb-6">
                <span class="text-gray-500 font-medium">
                    {move || {
                        let count = shown.with(|p| p.len());
                        if count == 1 {
                            "1 product".to_string()
                        } else {
                            format!("{} products", count)
                        }
                    }}
                </span>
                <button
                    class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                           font-medium shadow-sm transition-colors"
                    on:click=on_add
                >
                    "Add product"
                </button>
            </div>

            <Suspense fallback=move || view! {
                <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center">
                    <Loading message="Loading products..." />
                </div>
            }>
                {move || all_products.get().map(|_| view! {
                    <ProductTable products=shown on_edit=on_edit on_delete=on_delete />
                })}
            </Suspense>

            {move || pending.get().map(|action| view! {
                <ConfirmDialog
                    message=action.prompt()
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            })}
        </div>
    }
}
