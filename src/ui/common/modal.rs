use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
    /// Optional subtitle/description
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-lg)
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 modal-backdrop transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 modal-backdrop opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                            if element.class_list().contains("modal-backdrop") {
                                on_close.run(());
                            }
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div class=format!("w-full {} card max-h-[90vh] overflow-y-auto", max_width)>
                <div class="card-header">
                    <div>
                        <h3 class="title-lg">{move || title.get()}</h3>
                        {subtitle.map(|s| view! { <p class="subtitle">{move || s.get()}</p> })}
                    </div>
                    <button
                        type="button"
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Fechar"
                        aria-label="Fechar"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
