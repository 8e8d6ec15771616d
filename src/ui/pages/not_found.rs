//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background text-foreground flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 glass-card rounded-full flex items-center justify-center">
                    <Icon name=icons::COMPASS class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-primary glow-text mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">
                    "Página não encontrada"
                </h2>

                <p class="text-muted mb-8 max-w-md mx-auto">
                    "O endereço que você procura não existe ou foi movido."
                </p>

                <A href="/" attr:class="landing-btn-primary">
                    "Voltar ao início"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-muted">
                    "© 2025 Diix Academy"
                </p>
            </div>
        </div>
    }
}
