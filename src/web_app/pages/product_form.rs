// web_app/pages/product_form.rs - Add / edit product page
//
// The same page serves /addProduct and /editProduct/:id. All form state
// lives in one `ProductEditor`; saving, removing a supplier and saving a
// supplier edit go through a confirmation dialog first.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::ServerFnApi;
use crate::web_app::workflow::{self, or_logged, InventoryApi};

#[component]
pub fn ProductFormPage() -> impl IntoView {
    let params = use_params_map();
    match FormMode::from_route_param(params.get_untracked().get("id").as_deref()) {
        Some(mode) => view! { <ProductForm mode=mode /> }.into_any(),
        None => {
            tracing::warn!("Malformed product id in route, showing the listing");
            view! { <Redirect path=AppRoute::Products.path() /> }.into_any()
        }
    }
}

#[component]
fn ProductForm(mode: FormMode) -> impl IntoView {
    let notices = use_notice_queue();
    let navigate = StoredValue::new_local(use_navigate());

    let editor = RwSignal::new(ProductEditor::new(mode));
    let pending = RwSignal::new(None::<PendingAction>);
    let submitting = RwSignal::new(false);

    let types = Resource::new(
        || (),
        |_| async move { or_logged("product types", ServerFnApi.type_products().await) },
    );
    let catalog = Resource::new(
        || (),
        |_| async move { or_logged("suppliers", ServerFnApi.suppliers().await) },
    );
    let existing = Resource::new(
        move || mode,
        |mode| async move {
            let FormMode::Edit(id) = mode else {
                return None;
            };
            workflow::load_product_for_edit(&ServerFnApi, id).await.ok()
        },
    );

    // Types must be in place before the product is loaded so its type
    // resolves against the selector options.
    Effect::new(move |_| {
        let (Some(types), Some(catalog), Some(existing)) =
            (types.get(), catalog.get(), existing.get())
        else {
            return;
        };
        editor.update(|e| {
            e.set_types(types);
            e.set_catalog(catalog);
            if let Some((product, suppliers)) = existing {
                e.load_product(&product);
                e.load_suppliers(suppliers);
            }
        });
    });

    let go_to_listing = move || {
        navigate.with_value(|nav| nav(AppRoute::Products.path().as_str(), NavigateOptions::default()));
    };

    let report = move |result: Result<(), FormError>| {
        if let Err(e) = result {
            notices.push(Notice::error(e.to_string()));
        }
    };

    let on_add_supplier = Callback::new(move |()| {
        let mut result = Ok(());
        editor.update(|e| result = e.add_supplier());
        report(result);
    });

    let on_edit_supplier = Callback::new(move |id: i64| {
        let mut result = Ok(());
        editor.update(|e| result = e.begin_supplier_edit(id));
        report(result);
    });

    let on_commit_supplier = Callback::new(move |()| {
        pending.set(Some(PendingAction::CommitSupplierEdit));
    });

    let on_cancel_supplier = Callback::new(move |()| {
        editor.update(|e| e.cancel_supplier_edit());
    });

    let on_remove_supplier = Callback::new(move |id: i64| {
        pending.set(Some(PendingAction::RemoveSupplier(id)));
    });

    let submit = move || {
        let snapshot = editor.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            let outcome = match snapshot.mode() {
                FormMode::Create => workflow::submit_new_product(&ServerFnApi, &snapshot).await,
                FormMode::Edit(_) => workflow::submit_product_edit(&ServerFnApi, &snapshot).await,
            };
            submitting.set(false);
            notices.extend(outcome.notices);
            if outcome.navigate {
                go_to_listing();
            }
        });
    };

    let on_confirm = Callback::new(move |()| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        pending.set(None);
        match action {
            PendingAction::RemoveSupplier(id) => {
                editor.update(|e| {
                    e.remove_supplier(id);
                });
            }
            PendingAction::CommitSupplierEdit => {
                let mut result = Ok(());
                editor.update(|e| result = e.commit_supplier_edit());
                report(result);
            }
            PendingAction::SaveProduct | PendingAction::UpdateProduct => submit(),
            PendingAction::DeleteProduct(_) => {}
        }
    });

    let on_cancel = Callback::new(move |()| pending.set(None));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let action = if mode.is_edit() {
            PendingAction::UpdateProduct
        } else {
            PendingAction::SaveProduct
        };
        pending.set(Some(action));
    };

    let entries = Signal::derive(move || editor.with(|e| e.suppliers().active().to_vec()));

    view! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <Suspense fallback=move || view! {
                <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center">
                    <Loading message="Loading product..." />
                </div>
            }>
                {move || existing.get().map(|_| view! {
                    <form on:submit=on_submit class="space-y-8">
                        <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                            <h2 class="text-lg font-bold text-gray-800 mb-4">"Product"</h2>
                            <ProductFields editor=editor />
                        </section>

                        <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                            <h2 class="text-lg font-bold text-gray-800 mb-4">"Suppliers"</h2>
                            <SupplierSubForm
                                editor=editor
                                on_add=on_add_supplier
                                on_commit=on_commit_supplier
                                on_cancel=on_cancel_supplier
                            />
                            <SupplierTable
                                entries=entries
                                on_edit=on_edit_supplier
                                on_remove=on_remove_supplier
                            />
                        </section>

                        <div class="flex justify-end gap-3">
                            <SecondaryButton on_click=Callback::new(move |()| go_to_listing())>
                                "Cancel"
                            </SecondaryButton>
                            <Button button_type="submit" disabled=submitting>
                                {mode.submit_label()}
                            </Button>
                        </div>
                    </form>
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
