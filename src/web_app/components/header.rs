// web_app/components/header.rs - Page header
//
// The title shown in the header and in the document <title> is derived
// from the current route.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::web_app::model::AppRoute;

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| AppRoute::from_path(&location.pathname.get()));
    let title = move || route.get().title();

    view! {
        <Title text=title />
        <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <span class="text-2xl">"📦"</span>
                    <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                        {title}
                    </h1>
                </div>
                <a
                    href=AppRoute::Products.path()
                    class="text-sm text-gray-500 hover:text-blue-600 transition-colors"
                >
                    "Inventory"
                </a>
            </div>
        </header>
    }
}
