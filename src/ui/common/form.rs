use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline error line under a field
#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.as_ref().and_then(|e| e.get()).map(|err| view! {
            <div class="flex items-center gap-1 text-sm text-theme-error" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{err}</span>
            </div>
        })
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, date, password)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let is_password = input_type == "password";
    let revealed = RwSignal::new(false);
    let current_type = move || {
        if is_password && revealed.get() {
            "text"
        } else {
            input_type
        }
    };

    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <div class="relative">
                <input
                    type=current_type
                    class="input-base"
                    class:pr-10=is_password
                    class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
                {is_password.then(|| view! {
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 px-3 flex items-center"
                        aria-label=move || if revealed.get() { "Ocultar senha" } else { "Mostrar senha" }
                        on:click=move |_| revealed.update(|r| *r = !*r)
                    >
                        {move || if revealed.get() {
                            view! { <Icon name=icons::EYE_OFF class="w-4 h-4"/> }
                        } else {
                            view! { <Icon name=icons::EYE class="w-4 h-4"/> }
                        }}
                    </button>
                })}
            </div>
            <FieldError error=error/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                class="input-base resize-none"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error/>
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Text of the empty first option
    #[prop(default = "Selecione...".to_string())]
    prompt: String,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <select
                class="select-base"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                prop:value=move || value.get()
                on:change=move |ev| {
                    let val = event_target_value(&ev);
                    on_change.run(val);
                }
                disabled=move || disabled.get()
            >
                <option value="">{prompt}</option>
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val.clone()>{text}</option>
                    }
                }).collect_view()}
            </select>
            <FieldError error=error/>
        </div>
    }
}

/// Group of toggleable options, any number of which may be selected
#[component]
pub fn MultiChoiceField(
    /// Field label text
    label: String,
    /// Whether at least one option is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Currently selected option values
    selected: Signal<Vec<String>>,
    /// Called with the value of the option that was clicked
    on_toggle: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <fieldset class="space-y-1.5">
            <legend class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </legend>
            <div class="grid grid-cols-2 gap-2">
                {options.into_iter().map(|(val, text)| {
                    let is_selected = {
                        let val = val.clone();
                        move || selected.with(|s| s.contains(&val))
                    };
                    let chip_active = is_selected.clone();
                    view! {
                        <label class="choice-chip" class:choice-chip-active=chip_active>
                            <input
                                type="checkbox"
                                class="sr-only"
                                prop:checked=is_selected
                                on:change=move |_| on_toggle.run(val.clone())
                                disabled=move || disabled.get()
                            />
                            <span>{text}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
            <FieldError error=error/>
        </fieldset>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_multi_choice_marks_selected_chip() {
        let owner = Owner::new();
        owner.with(|| {
            let selected = Signal::stored(vec!["web".to_string()]);
            let options = vec![
                ("web".to_string(), "Desenvolvimento Web".to_string()),
                ("dados".to_string(), "Ciência de Dados".to_string()),
            ];
            let html = view! {
                <MultiChoiceField
                    label="Áreas de interesse".to_string()
                    selected=selected
                    on_toggle=Callback::new(|_: String| {})
                    options=options
                />
            }
            .to_html();

            assert_eq!(html.matches("choice-chip-active").count(), 1);
            assert!(html.contains("Ciência de Dados"));
        });
    }
}
