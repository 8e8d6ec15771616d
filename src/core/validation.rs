//! Field validation rules for the signup, login and contact forms
//!
//! Every rule is checked against a single field value and fails with a
//! field-scoped [`ValidationError`]. Rules that need to look at several fields
//! at once implement [`CrossFieldRule`] and are attached to a whole step.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::mask::DigitMask;
use super::steps::{Choice, FieldValue, FieldValues};

/// Symbols accepted by the strong password rule
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Date format produced by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single failed rule on a field. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{label} é obrigatório")]
    Required { label: &'static str },

    #[error("{label} deve ter no mínimo {min} caracteres")]
    TooShort { label: &'static str, min: usize },

    #[error("{label} inválido")]
    InvalidFormat { label: &'static str },

    #[error("Email inválido")]
    InvalidEmail,

    #[error("Data inválida")]
    InvalidDate,

    #[error("Você precisa ter pelo menos {min_years} anos")]
    Underage { min_years: u32 },

    #[error("Senha deve conter pelo menos uma letra maiúscula")]
    MissingUppercase,

    #[error("Senha deve conter pelo menos uma letra minúscula")]
    MissingLowercase,

    #[error("Senha deve conter pelo menos um número")]
    MissingDigit,

    #[error("Senha deve conter pelo menos um símbolo ({symbols})")]
    MissingSymbol { symbols: &'static str },

    #[error("Selecione uma opção em {label}")]
    NotAnOption { label: &'static str },

    #[error("Selecione pelo menos uma opção em {label}")]
    EmptySelection { label: &'static str },

    #[error("As senhas não coincidem")]
    Mismatch,
}

/// Validation strictness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Length checks only
    #[default]
    Standard,
    /// Longer credentials, password complexity and minimum age
    Strict,
}

impl std::str::FromStr for ValidationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown validation level '{}'", other)),
        }
    }
}

/// Ambient inputs for rules that depend on the outside world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// Date used for age checks
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Context for the current local date
    pub fn now() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

/// Field name to first failed rule on that field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Record an error unless the field already has one
    pub fn add(&mut self, field: &'static str, error: ValidationError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ValidationError)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Messages keyed by field name, for display or JSON responses
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// A rule applied to one field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// Text must not be blank
    Required,
    /// Text must have at least this many characters
    MinLength(usize),
    /// Well-formed email address
    Email,
    /// Either the formatted mask or its raw digits
    Masked(DigitMask),
    /// Date of birth giving at least this age
    MinAge(u32),
    /// Upper, lower, digit and symbol from [`PASSWORD_SYMBOLS`]
    StrongPassword,
    /// Value must be one of the choices
    OneOf(&'static [Choice]),
    /// Non-empty list with every entry among the choices
    SomeOf(&'static [Choice]),
}

impl FieldRule {
    /// Check the value, returning the first failure
    pub fn check(
        &self,
        label: &'static str,
        value: &FieldValue,
        ctx: &ValidationContext,
    ) -> Result<(), ValidationError> {
        match self {
            FieldRule::Required => {
                if value.as_text().trim().is_empty() {
                    return Err(ValidationError::Required { label });
                }
            }
            FieldRule::MinLength(min) => {
                if value.as_text().chars().count() < *min {
                    return Err(ValidationError::TooShort { label, min: *min });
                }
            }
            FieldRule::Email => {
                if !is_valid_email(value.as_text()) {
                    return Err(ValidationError::InvalidEmail);
                }
            }
            FieldRule::Masked(mask) => {
                if !mask.accepts(value.as_text()) {
                    return Err(ValidationError::InvalidFormat { label });
                }
            }
            FieldRule::MinAge(min_years) => {
                let birth = NaiveDate::parse_from_str(value.as_text().trim(), DATE_FORMAT)
                    .map_err(|_| ValidationError::InvalidDate)?;
                match age_on(birth, ctx.today) {
                    Some(age) if age >= *min_years => {}
                    Some(_) => {
                        return Err(ValidationError::Underage {
                            min_years: *min_years,
                        });
                    }
                    None => return Err(ValidationError::InvalidDate),
                }
            }
            FieldRule::StrongPassword => check_password_strength(value.as_text())?,
            FieldRule::OneOf(choices) => {
                let text = value.as_text();
                if !choices.iter().any(|c| c.value == text) {
                    return Err(ValidationError::NotAnOption { label });
                }
            }
            FieldRule::SomeOf(choices) => {
                let selected = value.as_list();
                if selected.is_empty()
                    || !selected
                        .iter()
                        .all(|s| choices.iter().any(|c| c.value == s.as_str()))
                {
                    return Err(ValidationError::EmptySelection { label });
                }
            }
        }
        Ok(())
    }
}

/// A rule over a whole step's values that reports on a single field
pub trait CrossFieldRule: std::fmt::Debug + Send + Sync {
    /// Field the error is attached to
    fn target(&self) -> &'static str;

    fn check(&self, values: &FieldValues) -> Result<(), ValidationError>;
}

/// Two fields must hold exactly the same text; the error lands on `field`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldsMatch {
    pub field: &'static str,
    pub other: &'static str,
}

impl CrossFieldRule for FieldsMatch {
    fn target(&self) -> &'static str {
        self.field
    }

    fn check(&self, values: &FieldValues) -> Result<(), ValidationError> {
        let a = values.get(self.field).map(FieldValue::as_text).unwrap_or("");
        let b = values.get(self.other).map(FieldValue::as_text).unwrap_or("");
        if a == b {
            Ok(())
        } else {
            Err(ValidationError::Mismatch)
        }
    }
}

/// Minimal structural email check: `local@domain.tld` without whitespace
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|l| !l.is_empty())
        && labels.last().is_some_and(|tld| tld.len() >= 2)
}

fn check_password_strength(password: &str) -> Result<(), ValidationError> {
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(ValidationError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(ValidationError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::MissingDigit);
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(ValidationError::MissingSymbol {
            symbols: PASSWORD_SYMBOLS,
        });
    }
    Ok(())
}

/// Completed years between `birth` and `today`, `None` for future dates
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mask::NATIONAL_ID;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap())
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    static COLORS: &[Choice] = &[
        Choice::new("red", "Vermelho"),
        Choice::new("blue", "Azul"),
    ];

    #[test]
    fn test_min_length_counts_chars() {
        let rule = FieldRule::MinLength(2);
        assert!(rule.check("Nome", &text("Jo"), &ctx()).is_ok());
        assert!(rule.check("Nome", &text("É"), &ctx()).is_err());
        assert_eq!(
            rule.check("Nome", &text("J"), &ctx()),
            Err(ValidationError::TooShort { label: "Nome", min: 2 })
        );
    }

    #[test]
    fn test_required() {
        assert!(FieldRule::Required.check("Data", &text("   "), &ctx()).is_err());
        assert!(FieldRule::Required.check("Data", &text("2000-01-01"), &ctx()).is_ok());
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("aluno@diix.com"));
        assert!(is_valid_email("a.b+c@mail.example.com.br"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("aluno"));
        assert!(!is_valid_email("aluno@"));
        assert!(!is_valid_email("@diix.com"));
        assert!(!is_valid_email("aluno@diix"));
        assert!(!is_valid_email("aluno@diix.c"));
        assert!(!is_valid_email("aluno@@diix.com"));
        assert!(!is_valid_email("al uno@diix.com"));
        assert!(!is_valid_email("aluno@diix..com"));
    }

    #[test]
    fn test_masked() {
        let rule = FieldRule::Masked(NATIONAL_ID);
        assert!(rule.check("CPF", &text("123.456.789-01"), &ctx()).is_ok());
        assert!(rule.check("CPF", &text("12345678901"), &ctx()).is_ok());
        assert_eq!(
            rule.check("CPF", &text("123.456"), &ctx()),
            Err(ValidationError::InvalidFormat { label: "CPF" })
        );
    }

    #[test]
    fn test_min_age_boundaries() {
        let rule = FieldRule::MinAge(14);
        // Turns 14 exactly on the validation date
        assert!(rule.check("Data", &text("2012-03-15"), &ctx()).is_ok());
        // Turns 14 tomorrow
        assert_eq!(
            rule.check("Data", &text("2012-03-16"), &ctx()),
            Err(ValidationError::Underage { min_years: 14 })
        );
        assert_eq!(
            rule.check("Data", &text("15/03/2000"), &ctx()),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(
            rule.check("Data", &text("2030-01-01"), &ctx()),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn test_age_on_leap_day() {
        let birth = NaiveDate::from_ymd_opt(2008, 2, 29).unwrap();
        let before = NaiveDate::from_ymd_opt(2022, 2, 28).unwrap();
        let after = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
        assert_eq!(age_on(birth, before), Some(13));
        assert_eq!(age_on(birth, after), Some(14));
    }

    #[test]
    fn test_strong_password() {
        let rule = FieldRule::StrongPassword;
        assert!(rule.check("Senha", &text("Abcdef1!"), &ctx()).is_ok());
        assert_eq!(
            rule.check("Senha", &text("abcdef1!"), &ctx()),
            Err(ValidationError::MissingUppercase)
        );
        assert_eq!(
            rule.check("Senha", &text("ABCDEF1!"), &ctx()),
            Err(ValidationError::MissingLowercase)
        );
        assert_eq!(
            rule.check("Senha", &text("Abcdefg!"), &ctx()),
            Err(ValidationError::MissingDigit)
        );
        assert_eq!(
            rule.check("Senha", &text("Abcdefg1#"), &ctx()),
            Err(ValidationError::MissingSymbol {
                symbols: PASSWORD_SYMBOLS
            })
        );
    }

    #[test]
    fn test_choices() {
        assert!(FieldRule::OneOf(COLORS).check("cor", &text("red"), &ctx()).is_ok());
        assert!(FieldRule::OneOf(COLORS).check("cor", &text(""), &ctx()).is_err());
        assert!(FieldRule::OneOf(COLORS).check("cor", &text("green"), &ctx()).is_err());

        let some = FieldRule::SomeOf(COLORS);
        assert!(some.check("cor", &FieldValue::List(vec!["blue".into()]), &ctx()).is_ok());
        assert!(some.check("cor", &FieldValue::List(vec![]), &ctx()).is_err());
        assert!(
            some.check("cor", &FieldValue::List(vec!["blue".into(), "x".into()]), &ctx())
                .is_err()
        );
    }

    #[test]
    fn test_fields_match() {
        let rule = FieldsMatch {
            field: "confirmar_senha",
            other: "senha",
        };
        let mut values = FieldValues::new();
        values.insert("senha".into(), text("abc"));
        values.insert("confirmar_senha".into(), text("abc"));
        assert!(rule.check(&values).is_ok());

        values.insert("confirmar_senha".into(), text("abd"));
        assert_eq!(rule.check(&values), Err(ValidationError::Mismatch));
        assert_eq!(rule.target(), "confirmar_senha");
    }

    #[test]
    fn test_field_errors_keeps_first() {
        let mut errors = FieldErrors::new();
        errors.add("senha", ValidationError::MissingDigit);
        errors.add("senha", ValidationError::Mismatch);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("senha"), Some(&ValidationError::MissingDigit));

        errors.clear_field("senha");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validation_level_from_str() {
        assert_eq!("strict".parse::<ValidationLevel>(), Ok(ValidationLevel::Strict));
        assert_eq!(" Standard ".parse::<ValidationLevel>(), Ok(ValidationLevel::Standard));
        assert!("lenient".parse::<ValidationLevel>().is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::TooShort { label: "Nome", min: 2 }.to_string(),
            "Nome deve ter no mínimo 2 caracteres"
        );
        assert_eq!(ValidationError::Mismatch.to_string(), "As senhas não coincidem");
    }
}
