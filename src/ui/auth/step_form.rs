//! Renders one [`StepSchema`] as form inputs bound to a [`Wizard`]

use leptos::prelude::*;

use crate::core::steps::{Choice, FieldKind, FieldSchema, StepSchema};
use crate::core::wizard::Wizard;
use crate::ui::common::{FormField, MultiChoiceField, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};

/// Position of a step relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

/// State of the 1-based `step` while `current` is active
pub fn step_state(step: usize, current: usize) -> StepState {
    use std::cmp::Ordering;
    match step.cmp(&current) {
        Ordering::Less => StepState::Done,
        Ordering::Equal => StepState::Current,
        Ordering::Greater => StepState::Upcoming,
    }
}

fn input_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        FieldKind::Date => "date",
        FieldKind::Masked(_) => "tel",
        _ => "text",
    }
}

fn options(choices: &[Choice]) -> Vec<(String, String)> {
    choices
        .iter()
        .map(|c| (c.value.to_string(), c.label.to_string()))
        .collect()
}

/// Progress dots with the title of each signup step
#[component]
pub fn StepIndicator(
    /// (title, icon) for every step
    steps: Vec<(&'static str, &'static str)>,
    /// Active 1-based step
    #[prop(into)]
    current: Signal<usize>,
) -> impl IntoView {
    let total = steps.len();

    view! {
        <ol class="flex items-center justify-between mb-6" aria-label="Etapas do cadastro">
            {steps.into_iter().enumerate().map(|(i, (title, icon))| {
                let step = i + 1;
                let state = move || step_state(step, current.get());
                view! {
                    <li
                        class="flex flex-col items-center gap-1 flex-1"
                        aria-current=move || (state() == StepState::Current).then_some("step")
                    >
                        <div
                            class="step-dot"
                            class:step-dot-done=move || state() == StepState::Done
                            class:step-dot-current=move || state() == StepState::Current
                        >
                            {move || if state() == StepState::Done {
                                view! { <Icon name=icons::CHECK class="w-4 h-4"/> }
                            } else {
                                view! { <Icon name=icon class="w-4 h-4"/> }
                            }}
                        </div>
                        <span class="text-xs hidden sm:block">{title}</span>
                        {(step < total).then(|| view! { <span class="step-connector" aria-hidden="true"/> })}
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}

/// Inputs for every field of a step
#[component]
pub fn StepFields(
    schema: StepSchema,
    wizard: RwSignal<Wizard>,
    /// Locks the inputs while a transition or a request is pending
    #[prop(into)]
    locked: Signal<bool>,
) -> impl IntoView {
    schema
        .fields
        .into_iter()
        .map(|field| view! { <StepField field=field wizard=wizard locked=locked/> })
        .collect_view()
}

#[component]
fn StepField(field: FieldSchema, wizard: RwSignal<Wizard>, locked: Signal<bool>) -> impl IntoView {
    let name = field.name;
    let required = field.is_required();
    let label = field.label.to_string();
    let placeholder = field.placeholder.to_string();

    let value = Signal::derive(move || wizard.with(|w| w.text(name)));
    let error = Signal::derive(move || {
        wizard.with(|w| w.errors().get(name).map(|e| e.to_string()))
    });
    let on_text = Callback::new(move |raw: String| {
        wizard.update(|w| {
            w.set_text(name, &raw);
        });
    });

    match field.kind {
        FieldKind::LongText => view! {
            <TextAreaField
                label=label
                required=required
                placeholder=placeholder
                value=value
                on_input=on_text
                disabled=locked
                error=error
            />
        }
        .into_any(),
        FieldKind::Select(choices) => view! {
                <SelectField
                    label=label
                    required=required
                    value=value
                    on_change=on_text
                    options=options(choices)
                    disabled=locked
                    error=error
                />
        }
        .into_any(),
        FieldKind::MultiSelect(choices) => {
            let selected = Signal::derive(move || {
                wizard.with(|w| w.value(name).map(|v| v.as_list().to_vec()).unwrap_or_default())
            });
            let on_toggle = Callback::new(move |choice: String| {
                wizard.update(|w| {
                    w.toggle_choice(name, &choice);
                });
            });
            view! {
                <MultiChoiceField
                    label=label
                    required=required
                    selected=selected
                    on_toggle=on_toggle
                    options=options(choices)
                    disabled=locked
                    error=error
                />
            }
            .into_any()
        }
        kind => view! {
            <FormField
                label=label
                required=required
                input_type=input_type(&kind)
                placeholder=placeholder
                value=value
                on_input=on_text
                disabled=locked
                error=error
            />
        }
        .into_any(),
    }
}
