// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the page header and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::{Header, NoticeHost, NoticeQueue};
use crate::web_app::model::AppRoute;
use crate::web_app::pages::{ProductFormPage, ProductsPage};

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Header whose title follows the active route
/// - Notice dialogs shared by every page
/// - Router with the listing, add and edit routes; anything else
///   redirects to the listing
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    // Notices outlive the page that raised them
    provide_context(NoticeQueue::new());

    view! {
        <Meta name="description" content="Inventory management: products and their suppliers" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/inventory_web.css" />

        <Router>
            <Header />
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <Redirect path=AppRoute::Products.path() /> }>
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/addProduct") view=ProductFormPage />
                    <Route path=path!("/editProduct/:id") view=ProductFormPage />
                </Routes>
            </main>
            <NoticeHost />
        </Router>
    }
}
