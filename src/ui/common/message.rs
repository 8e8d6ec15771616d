//! Banners for form-level errors and confirmations

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error banner, hidden while the signal is `None`
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success banner, hidden while the signal is `None`
#[component]
pub fn SuccessMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="success-message" role="status">
                <Icon name=icons::CHECK class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
