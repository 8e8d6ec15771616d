//! Login / multi-step signup state machine
//!
//! The wizard is either in `Login` or in `Signup { step }` (1-based). Moving
//! forward validates the active step and merges its values into the
//! accumulator; moving back never validates and never discards anything.
//! Toggling between login and signup starts the signup over from step 1.
//!
//! Every state change raises a short "transitioning" gate during which input
//! is refused. The gate is purely cosmetic: the host lowers it with
//! [`Wizard::settle`] once its animation timer fires.

use super::steps::{FieldKind, FieldValue, FieldValues, StepSchema, login_step, signup_steps};
use super::submission::Submission;
use super::validation::{FieldErrors, ValidationContext, ValidationLevel};

/// Delay before the next step's inputs become interactive
pub const TRANSITION_MS: u64 = 300;

/// Which form the modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Login,
    Signup { step: usize },
}

impl Mode {
    pub fn is_signup(&self) -> bool {
        matches!(self, Mode::Signup { .. })
    }
}

/// Target of an explicit login/signup toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Login,
    Signup,
}

/// Result of a successful submit or back navigation
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Moved to a later signup step
    Advanced { step: usize },
    /// Moved to an earlier signup step
    Returned { step: usize },
    /// Final payload for the submission collaborator
    Completed(Submission),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("Corrija os campos destacados")]
    Invalid(FieldErrors),

    #[error("Aguarde a transição terminar")]
    Transitioning,

    #[error("Não há etapa anterior")]
    AtFirstStep,
}

fn has_disjoint_fields(steps: &[StepSchema]) -> bool {
    let mut names: Vec<&str> = steps.iter().flat_map(|s| s.field_names()).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    names.len() == total
}

/// One modal session: current mode, per-step drafts and the accumulator
#[derive(Debug, Clone)]
pub struct Wizard {
    mode: Mode,
    login: StepSchema,
    steps: Vec<StepSchema>,
    login_draft: FieldValues,
    drafts: Vec<FieldValues>,
    accumulator: FieldValues,
    errors: FieldErrors,
    transitioning: bool,
}

impl Wizard {
    /// Start a session in login mode.
    ///
    /// # Panics
    ///
    /// If `steps` is empty or two steps declare the same field name.
    pub fn new(login: StepSchema, steps: Vec<StepSchema>) -> Self {
        assert!(!steps.is_empty(), "signup needs at least one step");
        assert!(
            has_disjoint_fields(&steps),
            "signup steps must declare disjoint fields"
        );

        let login_draft = login.defaults();
        let drafts = steps.iter().map(StepSchema::defaults).collect();
        Self {
            mode: Mode::Login,
            login,
            steps,
            login_draft,
            drafts,
            accumulator: FieldValues::new(),
            errors: FieldErrors::new(),
            transitioning: false,
        }
    }

    /// Session using the built-in login and signup schemas
    pub fn for_level(level: ValidationLevel) -> Self {
        Self::new(login_step(), signup_steps(level))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[StepSchema] {
        &self.steps
    }

    /// Schema of the form currently shown
    pub fn current_schema(&self) -> &StepSchema {
        match self.mode {
            Mode::Login => &self.login,
            Mode::Signup { step } => &self.steps[step - 1],
        }
    }

    /// Values typed into the form currently shown
    pub fn values(&self) -> &FieldValues {
        match self.mode {
            Mode::Login => &self.login_draft,
            Mode::Signup { step } => &self.drafts[step - 1],
        }
    }

    fn values_mut(&mut self) -> &mut FieldValues {
        match self.mode {
            Mode::Login => &mut self.login_draft,
            Mode::Signup { step } => &mut self.drafts[step - 1],
        }
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values().get(field)
    }

    /// Text of a field on the current form, empty if unknown
    pub fn text(&self, field: &str) -> String {
        self.value(field)
            .map(|v| v.as_text().to_string())
            .unwrap_or_default()
    }

    /// Validated values merged across completed signup steps
    pub fn accumulator(&self) -> &FieldValues {
        &self.accumulator
    }

    /// Field errors from the last rejected submit on the current form
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Lower the transition gate
    pub fn settle(&mut self) {
        self.transitioning = false;
    }

    /// Store raw input for a field, applying its keystroke formatting.
    ///
    /// Returns the stored text, or `None` when the field is not part of the
    /// current form. Any error shown on that field is cleared.
    pub fn set_text(&mut self, field: &str, raw: &str) -> Option<String> {
        let schema = self.current_schema().get_field(field)?;
        if matches!(schema.kind, FieldKind::MultiSelect(_)) {
            return None;
        }
        let name = schema.name;
        let formatted = schema.normalize(raw);

        self.values_mut()
            .insert(name.to_string(), FieldValue::Text(formatted.clone()));
        self.errors.clear_field(name);
        Some(formatted)
    }

    /// Add or remove one option of a multi-select field
    pub fn toggle_choice(&mut self, field: &str, choice: &str) -> bool {
        let Some(schema) = self.current_schema().get_field(field) else {
            return false;
        };
        let FieldKind::MultiSelect(options) = schema.kind else {
            return false;
        };
        if !options.iter().any(|o| o.value == choice) {
            return false;
        }
        let name = schema.name;

        let entry = self
            .values_mut()
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        let mut selected = entry.as_list().to_vec();
        if let Some(pos) = selected.iter().position(|s| s == choice) {
            selected.remove(pos);
        } else {
            selected.push(choice.to_string());
        }
        *entry = FieldValue::List(selected);

        self.errors.clear_field(name);
        true
    }

    /// Validate the current form and move forward.
    ///
    /// Invalid input leaves the mode, the drafts and the accumulator
    /// untouched. On the last signup step (and on login) the merged payload
    /// is returned for submission; the mode stays put so a rejected
    /// submission can be retried.
    pub fn submit(&mut self, ctx: &ValidationContext) -> Result<Transition, WizardError> {
        if self.transitioning {
            return Err(WizardError::Transitioning);
        }

        let accepted = match self.current_schema().validate(self.values(), ctx) {
            Ok(values) => values,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(WizardError::Invalid(errors));
            }
        };
        self.errors = FieldErrors::new();

        match self.mode {
            Mode::Login => Ok(Transition::Completed(Submission::login(accepted))),
            Mode::Signup { step } => {
                self.accumulator.extend(accepted);
                if step < self.steps.len() {
                    let next = step + 1;
                    self.mode = Mode::Signup { step: next };
                    self.transitioning = true;
                    Ok(Transition::Advanced { step: next })
                } else {
                    Ok(Transition::Completed(Submission::signup(
                        self.accumulator.clone(),
                    )))
                }
            }
        }
    }

    /// Go back one signup step without validating
    pub fn back(&mut self) -> Result<Transition, WizardError> {
        if self.transitioning {
            return Err(WizardError::Transitioning);
        }
        match self.mode {
            Mode::Signup { step } if step > 1 => {
                let previous = step - 1;
                self.mode = Mode::Signup { step: previous };
                self.errors = FieldErrors::new();
                self.transitioning = true;
                Ok(Transition::Returned { step: previous })
            }
            _ => Err(WizardError::AtFirstStep),
        }
    }

    /// Switch between login and signup.
    ///
    /// Signup always restarts at step 1 with an empty accumulator and fresh
    /// drafts, whatever step a previous attempt had reached.
    pub fn switch_mode(&mut self, kind: ModeKind) {
        self.mode = match kind {
            ModeKind::Login => Mode::Login,
            ModeKind::Signup => Mode::Signup { step: 1 },
        };
        self.accumulator.clear();
        self.drafts = self.steps.iter().map(StepSchema::defaults).collect();
        self.errors = FieldErrors::new();
        self.transitioning = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::submission::SubmissionKind;
    use crate::core::validation::ValidationError;
    use chrono::NaiveDate;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn fill(wizard: &mut Wizard, pairs: &[(&str, &str)]) {
        for (field, value) in pairs {
            assert!(wizard.set_text(field, value).is_some(), "unknown field {}", field);
        }
    }

    fn signup_wizard() -> Wizard {
        let mut wizard = Wizard::for_level(ValidationLevel::Standard);
        wizard.switch_mode(ModeKind::Signup);
        wizard.settle();
        wizard
    }

    #[test]
    #[should_panic(expected = "signup needs at least one step")]
    fn test_new_rejects_empty_signup() {
        let _ = Wizard::new(login_step(), Vec::new());
    }

    #[test]
    #[should_panic(expected = "signup steps must declare disjoint fields")]
    fn test_new_rejects_shared_field_names() {
        let steps = signup_steps(ValidationLevel::Standard);
        let repeated = vec![steps[0].clone(), steps[0].clone()];
        let _ = Wizard::new(login_step(), repeated);
    }

    #[test]
    fn test_builtin_signup_fields_are_disjoint() {
        assert!(has_disjoint_fields(&signup_steps(ValidationLevel::Standard)));
        assert!(has_disjoint_fields(&signup_steps(ValidationLevel::Strict)));
    }

    const STEP1: &[(&str, &str)] = &[
        ("nome", "Ana"),
        ("sobrenome", "Lima"),
        ("cpf", "12345678901"),
        ("data_nascimento", "2001-05-20"),
    ];

    const STEP2: &[(&str, &str)] = &[
        ("cep", "01310100"),
        ("endereco", "Av. Paulista, 1000"),
        ("cidade", "São Paulo"),
        ("estado", "SP"),
        ("telefone", "11987654321"),
    ];

    const STEP3: &[(&str, &str)] = &[
        ("usuario", "analima"),
        ("email", "ana@diix.com"),
        ("senha", "segredo"),
        ("confirmar_senha", "segredo"),
    ];

    #[test]
    fn test_starts_in_login() {
        let wizard = Wizard::for_level(ValidationLevel::Standard);
        assert_eq!(wizard.mode(), Mode::Login);
        assert_eq!(wizard.step_count(), 4);
        assert!(!wizard.is_transitioning());
        assert_eq!(wizard.current_schema().id, "login");
    }

    #[test]
    fn test_login_completes_with_payload() {
        let mut wizard = Wizard::for_level(ValidationLevel::Standard);
        fill(&mut wizard, &[("email", "ana@diix.com"), ("password", "segredo")]);

        match wizard.submit(&ctx()) {
            Ok(Transition::Completed(submission)) => {
                assert_eq!(submission.kind, SubmissionKind::Login);
                assert_eq!(submission.fields["email"], FieldValue::text("ana@diix.com"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(wizard.mode(), Mode::Login);
    }

    #[test]
    fn test_invalid_submit_keeps_step_and_values() {
        let mut wizard = signup_wizard();
        fill(&mut wizard, &[("nome", "A"), ("sobrenome", "Lima")]);

        let err = wizard.submit(&ctx()).unwrap_err();
        let WizardError::Invalid(errors) = err else {
            panic!("expected field errors");
        };
        assert!(errors.contains("nome"));
        assert_eq!(wizard.mode(), Mode::Signup { step: 1 });
        assert_eq!(wizard.text("nome"), "A");
        assert_eq!(wizard.text("sobrenome"), "Lima");
        assert!(wizard.accumulator().is_empty());
        assert!(wizard.errors().contains("nome"));
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut wizard = signup_wizard();
        let _ = wizard.submit(&ctx());
        assert!(wizard.errors().contains("nome"));
        assert!(wizard.errors().contains("cpf"));

        wizard.set_text("nome", "Ana");
        assert!(!wizard.errors().contains("nome"));
        assert!(wizard.errors().contains("cpf"));
    }

    #[test]
    fn test_masked_fields_format_on_input() {
        let mut wizard = signup_wizard();
        assert_eq!(wizard.set_text("cpf", "1234").as_deref(), Some("123.4"));
        assert_eq!(
            wizard.set_text("cpf", "12345678901").as_deref(),
            Some("123.456.789-01")
        );
        assert_eq!(wizard.text("cpf"), "123.456.789-01");
        assert_eq!(wizard.set_text("cep", "01310100"), None);
    }

    #[test]
    fn test_valid_submit_advances_and_merges() {
        let mut wizard = signup_wizard();
        fill(&mut wizard, STEP1);

        assert_eq!(wizard.submit(&ctx()), Ok(Transition::Advanced { step: 2 }));
        assert_eq!(wizard.mode(), Mode::Signup { step: 2 });
        assert!(wizard.is_transitioning());

        let acc = wizard.accumulator();
        assert_eq!(acc.len(), 4);
        assert_eq!(acc["cpf"], FieldValue::text("123.456.789-01"));
    }

    #[test]
    fn test_input_refused_while_transitioning() {
        let mut wizard = signup_wizard();
        fill(&mut wizard, STEP1);
        wizard.submit(&ctx()).unwrap();

        assert_eq!(wizard.submit(&ctx()), Err(WizardError::Transitioning));
        assert_eq!(wizard.back(), Err(WizardError::Transitioning));
        wizard.settle();
        assert_eq!(wizard.back(), Ok(Transition::Returned { step: 1 }));
    }

    #[test]
    fn test_back_is_unconditional_and_keeps_data() {
        let mut wizard = signup_wizard();
        fill(&mut wizard, STEP1);
        wizard.submit(&ctx()).unwrap();
        wizard.settle();

        // Partially typed step 2, then back, then forward again
        fill(&mut wizard, &[("cep", "0131"), ("cidade", "X")]);
        assert_eq!(wizard.back(), Ok(Transition::Returned { step: 1 }));
        wizard.settle();
        assert_eq!(wizard.accumulator().len(), 4);
        assert_eq!(wizard.text("nome"), "Ana");

        assert_eq!(wizard.submit(&ctx()), Ok(Transition::Advanced { step: 2 }));
        wizard.settle();
        assert_eq!(wizard.text("cep"), "0131");
        assert_eq!(wizard.text("cidade"), "X");
        assert_eq!(wizard.text("pais"), "Brasil");
    }

    #[test]
    fn test_back_from_first_step_or_login() {
        let mut wizard = signup_wizard();
        assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));

        let mut wizard = Wizard::for_level(ValidationLevel::Standard);
        assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));
    }

    #[test]
    fn test_full_signup_produces_merged_payload() {
        let mut wizard = signup_wizard();
        for step in [STEP1, STEP2, STEP3] {
            fill(&mut wizard, step);
            assert!(matches!(
                wizard.submit(&ctx()),
                Ok(Transition::Advanced { .. })
            ));
            wizard.settle();
        }

        assert_eq!(wizard.mode(), Mode::Signup { step: 4 });
        wizard.set_text("nivel_conhecimento", "basico");
        assert!(wizard.toggle_choice("interesses", "programacao"));
        assert!(wizard.toggle_choice("interesses", "eletrica"));
        assert!(wizard.toggle_choice("interesses", "eletrica"));
        assert!(!wizard.toggle_choice("interesses", "culinaria"));

        let Ok(Transition::Completed(submission)) = wizard.submit(&ctx()) else {
            panic!("expected completion");
        };
        assert_eq!(submission.kind, SubmissionKind::Signup);
        assert_eq!(submission.fields.len(), 18);
        assert_eq!(submission.fields["pais"], FieldValue::text("Brasil"));
        assert_eq!(submission.fields["telefone"], FieldValue::text("(11) 98765-4321"));
        assert_eq!(
            submission.fields["interesses"],
            FieldValue::List(vec!["programacao".into()])
        );
    }

    #[test]
    fn test_confirm_mismatch_blocks_step_three() {
        let mut wizard = signup_wizard();
        for step in [STEP1, STEP2] {
            fill(&mut wizard, step);
            wizard.submit(&ctx()).unwrap();
            wizard.settle();
        }
        fill(&mut wizard, STEP3);
        wizard.set_text("confirmar_senha", "outra-senha");

        let Err(WizardError::Invalid(errors)) = wizard.submit(&ctx()) else {
            panic!("expected mismatch");
        };
        assert_eq!(errors.get("confirmar_senha"), Some(&ValidationError::Mismatch));
        assert_eq!(wizard.mode(), Mode::Signup { step: 3 });
    }

    #[test]
    fn test_switching_mode_resets_signup() {
        let mut wizard = signup_wizard();
        for step in [STEP1, STEP2] {
            fill(&mut wizard, step);
            wizard.submit(&ctx()).unwrap();
            wizard.settle();
        }
        assert_eq!(wizard.mode(), Mode::Signup { step: 3 });

        wizard.switch_mode(ModeKind::Login);
        wizard.settle();
        assert_eq!(wizard.mode(), Mode::Login);

        wizard.switch_mode(ModeKind::Signup);
        assert!(wizard.is_transitioning());
        wizard.settle();
        assert_eq!(wizard.mode(), Mode::Signup { step: 1 });
        assert!(wizard.accumulator().is_empty());
        assert_eq!(wizard.text("nome"), "");
    }

    #[test]
    fn test_login_draft_survives_mode_toggle() {
        let mut wizard = Wizard::for_level(ValidationLevel::Standard);
        wizard.set_text("email", "ana@diix.com");
        wizard.switch_mode(ModeKind::Signup);
        wizard.switch_mode(ModeKind::Login);
        assert_eq!(wizard.text("email"), "ana@diix.com");
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut wizard = Wizard::for_level(ValidationLevel::Standard);
        assert_eq!(wizard.set_text("cpf", "123"), None);
        assert!(!wizard.values().contains_key("cpf"));
    }
}
