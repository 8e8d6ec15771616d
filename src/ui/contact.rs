//! Contact section with the "Fale Conosco" form

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::steps::{FieldKind, FieldValue, StepSchema, contact_step};
use crate::core::submission::Submission;
use crate::core::validation::{FieldErrors, ValidationContext};
use crate::ui::auth::send_submission;
use crate::ui::common::{ErrorMessage, FormField, SuccessMessage, TextAreaField};
use crate::ui::icon::{Icon, icons};

const SENT_MESSAGE: &str = "Mensagem enviada! Retornaremos em breve.";

struct ContactInfo {
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    href: Option<&'static str>,
}

static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: icons::MAIL,
        title: "Email",
        value: "contato@diixacademy.com",
        href: Some("mailto:contato@diixacademy.com"),
    },
    ContactInfo {
        icon: icons::PHONE,
        title: "Telefone",
        value: "+55 (11) 99999-9999",
        href: Some("tel:+5511999999999"),
    },
    ContactInfo {
        icon: icons::MAP_PIN,
        title: "Endereço",
        value: "São Paulo, Brasil",
        href: None,
    },
];

#[component]
pub fn ContactSection() -> impl IntoView {
    let schema = StoredValue::new(contact_step());
    let values = RwSignal::new(schema.with_value(StepSchema::defaults));
    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);
    let failure = RwSignal::new(None::<String>);
    let sent = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        failure.set(None);
        sent.set(None);

        let checked = schema.with_value(|s| {
            values.with_untracked(|v| s.validate(v, &ValidationContext::now()))
        });
        let accepted = match checked {
            Ok(accepted) => accepted,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        pending.set(true);

        spawn_local(async move {
            match send_submission(&Submission::contact(accepted)).await {
                Ok(receipt) => {
                    leptos::logging::log!("contact message accepted as {}", receipt.id);
                    values.set(schema.with_value(StepSchema::defaults));
                    sent.set(Some(SENT_MESSAGE.to_string()));
                }
                Err(err) => {
                    leptos::logging::warn!("contact message rejected: {:?}", err);
                    failure.set(Some(err.to_string()));
                }
            }
            pending.set(false);
        });
    };

    let fields = schema.with_value(|s| s.fields.clone());

    view! {
        <section id="contato" class="py-24 px-4 relative overflow-hidden">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="section-title">
                        "Entre em " <span class="text-primary glow-text">"Contato"</span>
                    </h2>
                    <p class="section-subtitle">
                        "Tem dúvidas? Nossa equipe está pronta para ajudar você a começar sua jornada"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-6 landing-scroll-animate">
                        <h3 class="text-2xl font-semibold">"Vamos conversar"</h3>
                        <p class="text-muted">
                            "Estamos aqui para responder suas perguntas e ajudar você a escolher o curso ideal."
                        </p>
                        <ul class="space-y-4">
                            {CONTACT_INFO.iter().map(|item| view! {
                                <li class="glass-card rounded-xl p-4 flex items-center gap-4">
                                    <div class="w-12 h-12 rounded-lg bg-primary/10 flex items-center justify-center">
                                        <Icon name=item.icon class="w-6 h-6"/>
                                    </div>
                                    <div>
                                        <div class="text-sm text-muted">{item.title}</div>
                                        {match item.href {
                                            Some(href) => view! {
                                                <a href=href class="font-medium hover:text-primary transition-colors">{item.value}</a>
                                            }.into_any(),
                                            None => view! { <span class="font-medium">{item.value}</span> }.into_any(),
                                        }}
                                    </div>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <form on:submit=on_submit class="glass-card rounded-2xl p-8 space-y-4 landing-scroll-animate" novalidate=true>
                        <ErrorMessage error=failure/>
                        <SuccessMessage message=sent/>

                        {fields.into_iter().map(|field| {
                            let name = field.name;
                            let value = Signal::derive(move || {
                                values.with(|v| v.get(name).map(|f| f.as_text().to_string()).unwrap_or_default())
                            });
                            let error = Signal::derive(move || errors.with(|e| e.get(name).map(|e| e.to_string())));
                            let on_input = Callback::new(move |raw: String| {
                                let normalized = schema.with_value(|s| {
                                    s.get_field(name).map(|f| f.normalize(&raw)).unwrap_or(raw)
                                });
                                values.update(|v| {
                                    v.insert(name.to_string(), FieldValue::Text(normalized));
                                });
                                errors.update(|e| e.clear_field(name));
                            });
                            let label = field.label.to_string();
                            let placeholder = field.placeholder.to_string();
                            let required = field.is_required();

                            if matches!(field.kind, FieldKind::LongText) {
                                view! {
                                    <TextAreaField
                                        label=label
                                        required=required
                                        placeholder=placeholder
                                        value=value
                                        on_input=on_input
                                        rows=5
                                        disabled=pending
                                        error=error
                                    />
                                }.into_any()
                            } else {
                                view! {
                                    <FormField
                                        label=label
                                        required=required
                                        input_type=if matches!(field.kind, FieldKind::Email) { "email" } else { "text" }
                                        placeholder=placeholder
                                        value=value
                                        on_input=on_input
                                        disabled=pending
                                        error=error
                                    />
                                }.into_any()
                            }
                        }).collect_view()}

                        <button
                            type="submit"
                            class="btn-primary w-full"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Enviando..." } else { "Enviar Mensagem" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

