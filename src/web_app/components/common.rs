// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.
// The one exception is the notice queue, shared through context so a
// message survives the navigation that follows a save.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use rust_decimal::Decimal;

use crate::web_app::model::{Notice, NoticeKind};

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Provides modal backdrop styling. The open/close logic should be
/// handled by the parent.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    // Close on escape key
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-md flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-lg font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        "✕"
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Yes/no dialog shown before destructive or saving actions
#[component]
pub fn ConfirmDialog(
    /// Question to ask
    message: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalWrapper title="Confirm" on_close=on_cancel>
            <p class="text-gray-700 mb-6">{message}</p>
            <div class="flex justify-end gap-3">
                <SecondaryButton on_click=on_cancel>"Cancel"</SecondaryButton>
                <Button on_click=on_confirm>"OK"</Button>
            </div>
        </ModalWrapper>
    }
}

pub fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "text-green-700 bg-green-50 border border-green-200 rounded-lg p-4",
        NoticeKind::Error => "text-red-700 bg-red-50 border border-red-200 rounded-lg p-4",
    }
}

/// Blocking message with the outcome of an action
#[component]
pub fn NoticeDialog(notice: Notice, on_close: Callback<()>) -> impl IntoView {
    let title = match notice.kind {
        NoticeKind::Success => "Success",
        NoticeKind::Error => "Error",
    };

    view! {
        <ModalWrapper title=title on_close=on_close>
            <p class=notice_class(notice.kind)>{notice.message}</p>
            <div class="flex justify-end mt-6">
                <Button on_click=on_close>"OK"</Button>
            </div>
        </ModalWrapper>
    }
}

/// Notices waiting to be shown, oldest first
#[derive(Clone, Copy)]
pub struct NoticeQueue(RwSignal<Vec<Notice>>);

impl NoticeQueue {
    pub fn new() -> Self {
        Self(RwSignal::new(Vec::new()))
    }

    pub fn push(&self, notice: Notice) {
        self.0.update(|queue| queue.push(notice));
    }

    pub fn extend(&self, notices: Vec<Notice>) {
        self.0.update(|queue| queue.extend(notices));
    }

    pub fn front(&self) -> Option<Notice> {
        self.0.with(|queue| queue.first().cloned())
    }

    pub fn dismiss(&self) {
        self.0.update(|queue| {
            if !queue.is_empty() {
                queue.remove(0);
            }
        });
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notice_queue() -> NoticeQueue {
    expect_context::<NoticeQueue>()
}

/// Renders the oldest queued notice. The queue must be provided by an
/// ancestor (see `App`).
#[component]
pub fn NoticeHost() -> impl IntoView {
    let queue = use_notice_queue();

    let on_close = Callback::new(move |()| queue.dismiss());

    view! {
        {move || queue.front().map(|notice| view! {
            <NoticeDialog notice=notice on_close=on_close />
        })}
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    let class = match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}

pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price.round_dp(2))
}

/// Price display component
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
) -> impl IntoView {
    view! {
        <span class="text-gray-900 font-medium">
            {format_price(price)}
        </span>
    }
}
