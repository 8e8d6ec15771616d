//! Step schemas for the signup wizard, the login form and the contact form
//!
//! A [`StepSchema`] is an ordered list of fields, each with its own rules, plus
//! optional cross-field rules. Validating a step yields exactly the step's
//! declared fields, ready to be merged into the wizard accumulator.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::mask::{self, DigitMask};
use super::validation::{
    CrossFieldRule, FieldErrors, FieldRule, FieldsMatch, ValidationContext, ValidationLevel,
};

/// Minimum age for the strict signup variant
pub const MIN_SIGNUP_AGE: u32 = 14;

/// Country preset for the address step
pub const DEFAULT_COUNTRY: &str = "Brasil";

/// A value entered in a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Text content, empty for lists
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::List(_) => "",
        }
    }

    /// List content, empty for text
    pub fn as_list(&self) -> &[String] {
        match self {
            FieldValue::Text(_) => &[],
            FieldValue::List(items) => items,
        }
    }
}

/// Field name to value; also the wire payload
pub type FieldValues = BTreeMap<String, FieldValue>;

/// One option of a select or multi-select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

pub static KNOWLEDGE_LEVELS: &[Choice] = &[
    Choice::new("iniciante", "Iniciante"),
    Choice::new("basico", "Básico"),
    Choice::new("intermediario", "Intermediário"),
    Choice::new("avancado", "Avançado"),
    Choice::new("profissional", "Profissional"),
];

pub static INTERESTS: &[Choice] = &[
    Choice::new("informatica", "Informática"),
    Choice::new("programacao", "Programação"),
    Choice::new("eletrica", "Elétrica"),
    Choice::new("cyber_seguranca", "Cyber Segurança"),
];

/// How a field is entered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Date,
    LongText,
    /// Numeric input reformatted on every keystroke
    Masked(DigitMask),
    Select(&'static [Choice]),
    MultiSelect(&'static [Choice]),
}

/// Definition of one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Wire name, also the accumulator key
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub rules: Vec<FieldRule>,
    pub default: Option<&'static str>,
}

impl FieldSchema {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            kind,
            rules: Vec::new(),
            default: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// Initial value before the user types anything
    pub fn initial_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::MultiSelect(_) => FieldValue::List(Vec::new()),
            _ => FieldValue::text(self.default.unwrap_or_default()),
        }
    }

    /// Apply keystroke formatting to raw input
    pub fn normalize(&self, raw: &str) -> String {
        match self.kind {
            FieldKind::Masked(mask) => mask.format(raw),
            _ => raw.to_string(),
        }
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| {
            matches!(
                r,
                FieldRule::Required
                    | FieldRule::MinLength(_)
                    | FieldRule::Email
                    | FieldRule::Masked(_)
                    | FieldRule::OneOf(_)
                    | FieldRule::SomeOf(_)
            )
        })
    }
}

/// The ordered definition of one wizard step's fields and rules
#[derive(Debug, Clone)]
pub struct StepSchema {
    pub id: &'static str,
    pub title: &'static str,
    /// Icon shown in the step indicator
    pub icon: &'static str,
    pub fields: Vec<FieldSchema>,
    pub rules: Vec<Arc<dyn CrossFieldRule>>,
}

impl StepSchema {
    pub fn new(id: &'static str, title: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            title,
            icon,
            fields: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn cross_rule(mut self, rule: impl CrossFieldRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Initial values for every declared field
    pub fn defaults(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.initial_value()))
            .collect()
    }

    /// Validate the step.
    ///
    /// Field rules stop at the first failure per field. Cross-field rules run
    /// regardless of the individual results. On success only the declared
    /// fields are returned; anything else in `values` is ignored.
    pub fn validate(
        &self,
        values: &FieldValues,
        ctx: &ValidationContext,
    ) -> Result<FieldValues, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut accepted = FieldValues::new();

        for field in &self.fields {
            let value = values
                .get(field.name)
                .cloned()
                .unwrap_or_else(|| field.initial_value());

            if let Some(err) = field
                .rules
                .iter()
                .find_map(|rule| rule.check(field.label, &value, ctx).err())
            {
                errors.add(field.name, err);
            }

            accepted.insert(field.name.to_string(), value);
        }

        for rule in &self.rules {
            if let Err(err) = rule.check(&accepted) {
                errors.add(rule.target(), err);
            }
        }

        if errors.is_empty() {
            Ok(accepted)
        } else {
            Err(errors)
        }
    }
}

/// Single-step login form
pub fn login_step() -> StepSchema {
    StepSchema::new("login", "Entrar", "log-in")
        .field(
            FieldSchema::new("email", "Email", FieldKind::Email)
                .placeholder("seu@email.com")
                .rule(FieldRule::Email),
        )
        .field(
            FieldSchema::new("password", "Senha", FieldKind::Password)
                .placeholder("••••••••")
                .rule(FieldRule::MinLength(6)),
        )
}

/// The four signup steps for the given strictness
pub fn signup_steps(level: ValidationLevel) -> Vec<StepSchema> {
    let strict = level == ValidationLevel::Strict;

    let mut birth_date = FieldSchema::new("data_nascimento", "Data de nascimento", FieldKind::Date)
        .rule(FieldRule::Required);
    if strict {
        birth_date = birth_date.rule(FieldRule::MinAge(MIN_SIGNUP_AGE));
    }

    let basic = StepSchema::new("dados_basicos", "Dados Básicos", "user")
        .field(
            FieldSchema::new("nome", "Nome", FieldKind::Text)
                .placeholder("Seu nome")
                .rule(FieldRule::MinLength(2)),
        )
        .field(
            FieldSchema::new("sobrenome", "Sobrenome", FieldKind::Text)
                .placeholder("Seu sobrenome")
                .rule(FieldRule::MinLength(2)),
        )
        .field(
            FieldSchema::new("cpf", "CPF", FieldKind::Masked(mask::NATIONAL_ID))
                .placeholder("000.000.000-00")
                .rule(FieldRule::Masked(mask::NATIONAL_ID)),
        )
        .field(birth_date);

    let contact = StepSchema::new("informacoes", "Informações", "map-pin")
        .field(
            FieldSchema::new("cep", "CEP", FieldKind::Masked(mask::POSTAL_CODE))
                .placeholder("00000-000")
                .rule(FieldRule::Masked(mask::POSTAL_CODE)),
        )
        .field(
            FieldSchema::new("endereco", "Endereço", FieldKind::Text)
                .placeholder("Rua, número, complemento")
                .rule(FieldRule::MinLength(5)),
        )
        .field(
            FieldSchema::new("cidade", "Cidade", FieldKind::Text)
                .placeholder("Sua cidade")
                .rule(FieldRule::MinLength(2)),
        )
        .field(
            FieldSchema::new("estado", "Estado", FieldKind::Text)
                .placeholder("UF")
                .rule(FieldRule::MinLength(2)),
        )
        .field(
            FieldSchema::new("pais", "País", FieldKind::Text)
                .rule(FieldRule::MinLength(2))
                .default_value(DEFAULT_COUNTRY),
        )
        .field(
            FieldSchema::new("telefone", "Telefone", FieldKind::Masked(mask::PHONE))
                .placeholder("(00) 00000-0000")
                .rule(FieldRule::MinLength(10)),
        );

    let mut password = FieldSchema::new("senha", "Senha", FieldKind::Password)
        .placeholder("••••••••")
        .rule(FieldRule::MinLength(if strict { 8 } else { 6 }));
    if strict {
        password = password.rule(FieldRule::StrongPassword);
    }

    let credentials = StepSchema::new("acesso", "Acesso", "lock")
        .field(
            FieldSchema::new("usuario", "Usuário", FieldKind::Text)
                .placeholder("Nome de usuário")
                .rule(FieldRule::MinLength(if strict { 6 } else { 3 })),
        )
        .field(
            FieldSchema::new("email", "Email", FieldKind::Email)
                .placeholder("seu@email.com")
                .rule(FieldRule::Email),
        )
        .field(password)
        .field(
            FieldSchema::new("confirmar_senha", "Confirmação de senha", FieldKind::Password)
                .placeholder("••••••••")
                .rule(FieldRule::MinLength(if strict { 8 } else { 6 })),
        )
        .cross_rule(FieldsMatch {
            field: "confirmar_senha",
            other: "senha",
        });

    let preferences = StepSchema::new("preferencias", "Preferências", "sparkles")
        .field(
            FieldSchema::new("referencia", "Como nos conheceu?", FieldKind::Text)
                .placeholder("Indicação, redes sociais... (opcional)"),
        )
        .field(
            FieldSchema::new("cupom", "Cupom de desconto", FieldKind::Text)
                .placeholder("Código do cupom (opcional)"),
        )
        .field(
            FieldSchema::new(
                "nivel_conhecimento",
                "Nível de conhecimento",
                FieldKind::Select(KNOWLEDGE_LEVELS),
            )
            .rule(FieldRule::OneOf(KNOWLEDGE_LEVELS)),
        )
        .field(
            FieldSchema::new("interesses", "Áreas de interesse", FieldKind::MultiSelect(INTERESTS))
                .rule(FieldRule::SomeOf(INTERESTS)),
        );

    vec![basic, contact, credentials, preferences]
}

/// Contact form on the landing page
pub fn contact_step() -> StepSchema {
    StepSchema::new("contato", "Fale Conosco", "mail")
        .field(
            FieldSchema::new("nome", "Nome", FieldKind::Text)
                .placeholder("Seu nome")
                .rule(FieldRule::MinLength(2)),
        )
        .field(
            FieldSchema::new("email", "Email", FieldKind::Email)
                .placeholder("seu@email.com")
                .rule(FieldRule::Email),
        )
        .field(
            FieldSchema::new("assunto", "Assunto", FieldKind::Text)
                .placeholder("Como podemos ajudar?")
                .rule(FieldRule::MinLength(3)),
        )
        .field(
            FieldSchema::new("mensagem", "Mensagem", FieldKind::LongText)
                .placeholder("Escreva sua mensagem aqui...")
                .rule(FieldRule::MinLength(10)),
        )
}
