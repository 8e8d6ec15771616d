//! Login / signup modal
//!
//! Hosts one [`Wizard`] session per opening. The wizard owns validation and
//! step bookkeeping; this component only schedules the settle timer after
//! each transition and hands completed payloads to the submission client.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client::{ClientError, send_submission};
use super::step_form::{StepFields, StepIndicator};
use crate::core::submission::SubmissionReceipt;
use crate::core::validation::{ValidationContext, ValidationLevel};
use crate::core::wizard::{Mode, ModeKind, TRANSITION_MS, Transition, Wizard};
use crate::ui::common::{BaseModal, ErrorMessage};
use crate::ui::icon::{Icon, icons};

fn title_for(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "Bem-vindo de volta",
        Mode::Signup { .. } => "Crie sua conta",
    }
}

fn submit_label(mode: Mode, step_count: usize, pending: bool) -> &'static str {
    if pending {
        return "Enviando...";
    }
    match mode {
        Mode::Login => "Entrar",
        Mode::Signup { step } if step < step_count => "Próximo",
        Mode::Signup { .. } => "Criar conta",
    }
}

/// What a finished request does to the modal
#[derive(Debug, Clone, PartialEq)]
enum Reply {
    /// Accepted while its session is still showing
    Close(SubmissionReceipt),
    /// Rejected while its session is still showing
    Banner(String),
    /// The modal was closed, reopened or unmounted since the request left
    Stale,
}

/// Match a reply against the session it was sent from.
///
/// `current` is `None` once the modal's signals are gone.
fn reply_for(
    sent_in: u64,
    current: Option<u64>,
    result: Result<SubmissionReceipt, ClientError>,
) -> Reply {
    if current != Some(sent_in) {
        return Reply::Stale;
    }
    match result {
        Ok(receipt) => Reply::Close(receipt),
        Err(err) => Reply::Banner(err.to_string()),
    }
}

/// Auth modal with the login form and the multi-step signup
#[component]
pub fn AuthModal(
    #[prop(into)]
    is_open: Signal<bool>,
    /// Form shown when the modal opens
    #[prop(into)]
    initial_mode: Signal<ModeKind>,
    on_close: Callback<()>,
    /// Strictness of the signup rules
    #[prop(default = ValidationLevel::Strict)]
    level: ValidationLevel,
) -> impl IntoView {
    let wizard = RwSignal::new(Wizard::for_level(level));
    let pending = RwSignal::new(false);
    let banner = RwSignal::new(None::<String>);
    let session = RwSignal::new(0_u64);

    // Every opening starts a fresh session; closing retires the current one
    Effect::new(move |_| {
        let open = is_open.get();
        session.update(|s| *s = s.wrapping_add(1));
        if open {
            let mut fresh = Wizard::for_level(level);
            if initial_mode.get_untracked() == ModeKind::Signup {
                fresh.switch_mode(ModeKind::Signup);
                fresh.settle();
            }
            wizard.set(fresh);
            pending.set(false);
            banner.set(None);
        }
    });

    let mode = Memo::new(move |_| wizard.with(|w| w.mode()));
    let transitioning = Memo::new(move |_| wizard.with(|w| w.is_transitioning()));
    let locked = Signal::derive(move || transitioning.get() || pending.get());
    let step_count = wizard.with_untracked(|w| w.step_count());
    let step_list: Vec<(&'static str, &'static str)> =
        wizard.with_untracked(|w| w.steps().iter().map(|s| (s.title, s.icon)).collect());

    let schedule_settle = move || {
        set_timeout(
            move || wizard.update(Wizard::settle),
            Duration::from_millis(TRANSITION_MS),
        );
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        banner.set(None);

        let outcome = wizard.try_update(|w| w.submit(&ValidationContext::now()));
        match outcome {
            Some(Ok(Transition::Advanced { .. } | Transition::Returned { .. })) => schedule_settle(),
            Some(Ok(Transition::Completed(submission))) => {
                pending.set(true);
                let sent_in = session.get_untracked();
                spawn_local(async move {
                    let result = send_submission(&submission).await;
                    if let Err(err) = &result {
                        leptos::logging::warn!("{} rejected: {:?}", submission.kind, err);
                    }
                    match reply_for(sent_in, session.try_get_untracked(), result) {
                        Reply::Close(receipt) => {
                            leptos::logging::log!("{} accepted as {}", receipt.kind, receipt.id);
                            pending.set(false);
                            on_close.run(());
                        }
                        Reply::Banner(message) => {
                            banner.set(Some(message));
                            pending.set(false);
                        }
                        Reply::Stale => {
                            leptos::logging::log!("{} reply arrived after its session ended", submission.kind);
                        }
                    }
                });
            }
            // Field messages render inline
            Some(Err(_)) | None => {}
        }
    };

    let on_back = move |_| {
        if let Some(Ok(_)) = wizard.try_update(Wizard::back) {
            schedule_settle();
        }
    };

    let switch_to = move |kind: ModeKind| {
        if pending.get_untracked() {
            return;
        }
        banner.set(None);
        wizard.update(|w| w.switch_mode(kind));
        schedule_settle();
    };

    let indicator_steps = step_list.clone();

    let title = Signal::derive(move || title_for(mode.get()).to_string());
    let subtitle = Signal::derive(move || match mode.get() {
        Mode::Login => "Acesse sua conta para continuar aprendendo".to_string(),
        Mode::Signup { step } => {
            let name = step_list.get(step - 1).map(|(t, _)| *t).unwrap_or_default();
            format!("Etapa {} de {}: {}", step, step_count, name)
        }
    });
    let current_step = Signal::derive(move || match mode.get() {
        Mode::Signup { step } => step,
        Mode::Login => 0,
    });

    view! {
        <BaseModal
            title=title
            subtitle=subtitle
            is_open=is_open
            on_close=on_close
            max_width="max-w-xl"
        >
            <Show when=move || mode.get().is_signup()>
                <StepIndicator steps=indicator_steps.clone() current=current_step/>
            </Show>

            <form on:submit=on_submit class="space-y-4" novalidate=true>
                <ErrorMessage error=banner/>

                <div
                    class="space-y-4 transition-opacity duration-300"
                    class:opacity-0=move || transitioning.get()
                >
                    {move || {
                        // Rebuild only when the step changes so typing keeps focus
                        mode.track();
                        let schema = wizard.with_untracked(|w| w.current_schema().clone());
                        view! { <StepFields schema=schema wizard=wizard locked=locked/> }
                    }}
                </div>

                <div class="flex items-center gap-3 pt-2">
                    <Show when=move || matches!(mode.get(), Mode::Signup { step } if step > 1)>
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=on_back
                            disabled=move || locked.get()
                        >
                            <Icon name=icons::CHEVRON_LEFT class="w-4 h-4"/>
                            "Voltar"
                        </button>
                    </Show>
                    <button
                        type="submit"
                        class="btn-primary flex-1"
                        disabled=move || locked.get()
                    >
                        <Show when=move || pending.get()>
                            <Icon name=icons::LOADER class="w-4 h-4 animate-spin"/>
                        </Show>
                        {move || submit_label(mode.get(), step_count, pending.get())}
                    </button>
                </div>
            </form>

            <p class="text-center text-sm text-muted mt-6">
                {move || match mode.get() {
                    Mode::Login => view! {
                        "Ainda não tem conta? "
                        <button
                            type="button"
                            class="link-primary"
                            on:click=move |_| switch_to(ModeKind::Signup)
                        >
                            "Cadastre-se"
                        </button>
                    }
                    .into_any(),
                    Mode::Signup { .. } => view! {
                        "Já tem uma conta? "
                        <button
                            type="button"
                            class="link-primary"
                            on:click=move |_| switch_to(ModeKind::Login)
                        >
                            "Entrar"
                        </button>
                    }
                    .into_any(),
                }}
            </p>
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::submission::{ApiError, SubmissionKind};

    #[test]
    fn test_submit_label_follows_step() {
        assert_eq!(submit_label(Mode::Login, 4, false), "Entrar");
        assert_eq!(submit_label(Mode::Signup { step: 1 }, 4, false), "Próximo");
        assert_eq!(submit_label(Mode::Signup { step: 4 }, 4, false), "Criar conta");
    }

    #[test]
    fn test_pending_label_wins() {
        assert_eq!(submit_label(Mode::Signup { step: 4 }, 4, true), "Enviando...");
        assert_eq!(submit_label(Mode::Login, 4, true), "Enviando...");
    }

    #[test]
    fn test_reply_in_same_session() {
        let receipt = SubmissionReceipt::new(SubmissionKind::Signup);
        assert_eq!(
            reply_for(3, Some(3), Ok(receipt.clone())),
            Reply::Close(receipt)
        );

        let err = ClientError::Network("offline".to_string());
        assert_eq!(
            reply_for(3, Some(3), Err(err)),
            Reply::Banner("Falha de conexão. Tente novamente.".to_string())
        );
    }

    #[test]
    fn test_reply_after_reopen_is_dropped() {
        // Closed and reopened while the request was in flight
        let receipt = SubmissionReceipt::new(SubmissionKind::Signup);
        assert_eq!(reply_for(3, Some(5), Ok(receipt)), Reply::Stale);

        let err = ClientError::Rejected(ApiError::new("Dados inválidos", "INVALID_FIELDS"));
        assert_eq!(reply_for(3, Some(4), Err(err)), Reply::Stale);
    }

    #[test]
    fn test_reply_after_unmount_is_dropped() {
        let receipt = SubmissionReceipt::new(SubmissionKind::Login);
        assert_eq!(reply_for(1, None, Ok(receipt)), Reply::Stale);
    }

    #[test]
    fn test_titles() {
        assert_eq!(title_for(Mode::Login), "Bem-vindo de volta");
        assert_eq!(title_for(Mode::Signup { step: 2 }), "Crie sua conta");
    }
}
