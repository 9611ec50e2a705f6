//! Interactive question definitions.
//!
//! Each [`Question`] is a plain value. Its visibility and default are pure
//! functions of the answers collected before it, so the whole sequence can be
//! driven by any [`Prompter`](crate::ports::Prompter) implementation.

use super::identifiers::{
    validate_app_name, validate_hostname, validate_required, validate_weblib_name,
};
use super::{AppError, DerivedIdentifiers, LocalDefaults};

/// Question names. Server coordinates keep their `.env` spelling.
pub mod names {
    pub const APP_NAME: &str = "app_name";
    pub const WEBLIB_NAME: &str = "weblib_name";
    pub const PS_HOSTNAME: &str = "PS_HOSTNAME";
    pub const PS_ENVIRONMENT: &str = "PS_ENVIRONMENT";
    pub const PS_NODE: &str = "PS_NODE";
    pub const PS_USERNAME: &str = "PS_USERNAME";
    pub const PS_PASSWORD: &str = "PS_PASSWORD";
    pub const HAS_HTTP_AUTH: &str = "has_http_auth";
    pub const HTTP_USERNAME: &str = "HTTP_USERNAME";
    pub const HTTP_PASSWORD: &str = "HTTP_PASSWORD";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
}

impl Answer {
    pub fn text<S: Into<String>>(value: S) -> Self {
        Answer::Text(value.into())
    }
}

/// Answers in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    entries: Vec<(&'static str, Answer)>,
}

impl Answers {
    /// Record an answer, replacing any earlier one for the same question.
    pub fn insert(&mut self, name: &'static str, answer: Answer) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((name, answer)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.entries.iter().find(|(key, _)| *key == name).map(|(_, answer)| answer)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Answer::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn require_text(&self, name: &str) -> Result<&str, AppError> {
        match self.text(name) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(AppError::validation(format!("Missing answer for {}", name))),
        }
    }

    pub fn confirmed(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Answer::Confirm(true)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Answer)> {
        self.entries.iter().map(|(key, answer)| (*key, answer))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text, echoed.
    Text,
    /// Free text, masked.
    Secret,
    /// Yes/no.
    Confirm,
}

pub type Validator = fn(&str) -> Result<(), String>;

#[derive(Debug, Clone)]
pub enum DefaultValue {
    None,
    Fixed(Answer),
    Computed(fn(&Answers) -> Option<Answer>),
}

#[derive(Debug, Clone)]
pub struct Question {
    pub name: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    pub validate: Option<Validator>,
    pub default: DefaultValue,
    pub when: Option<fn(&Answers) -> bool>,
}

impl Question {
    fn text(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Text,
            validate: Some(validate_required),
            default: DefaultValue::None,
            when: None,
        }
    }

    fn secret(self) -> Self {
        Self { kind: QuestionKind::Secret, ..self }
    }

    fn validated_by(self, validate: Validator) -> Self {
        Self { validate: Some(validate), ..self }
    }

    fn defaulting_to(self, value: Option<&String>) -> Self {
        match value {
            Some(value) if !value.is_empty() => {
                Self { default: DefaultValue::Fixed(Answer::text(value.clone())), ..self }
            }
            _ => self,
        }
    }

    fn shown_when(self, when: fn(&Answers) -> bool) -> Self {
        Self { when: Some(when), ..self }
    }

    pub fn is_visible(&self, answers: &Answers) -> bool {
        self.when.is_none_or(|when| when(answers))
    }

    pub fn default_for(&self, answers: &Answers) -> Option<Answer> {
        match &self.default {
            DefaultValue::None => None,
            DefaultValue::Fixed(answer) => Some(answer.clone()),
            DefaultValue::Computed(compute) => compute(answers),
        }
    }

    /// Check an answer against this question's rule; `Err` carries the reason.
    pub fn check(&self, answer: &Answer) -> Result<(), String> {
        match (answer, self.validate) {
            (Answer::Text(value), Some(validate)) => validate(value),
            _ => Ok(()),
        }
    }
}

fn default_weblib(answers: &Answers) -> Option<Answer> {
    let raw = answers.text(names::APP_NAME)?;
    Some(Answer::text(DerivedIdentifiers::from_raw(raw).default_weblib_name))
}

fn http_auth_enabled(answers: &Answers) -> bool {
    answers.confirmed(names::HAS_HTTP_AUTH)
}

/// The ordered question sequence for one run.
///
/// `suggested_app_name` pre-fills the first question; `defaults` pre-fills
/// server coordinates saved by a previous run.
pub fn create_app_questions(
    defaults: &LocalDefaults,
    suggested_app_name: Option<&str>,
) -> Vec<Question> {
    let mut app_name = Question::text(names::APP_NAME, "Choose a name for your app:")
        .validated_by(validate_app_name);
    if let Some(suggested) = suggested_app_name {
        app_name.default = DefaultValue::Fixed(Answer::text(suggested));
    }

    let weblib_name = Question {
        default: DefaultValue::Computed(default_weblib),
        ..Question::text(names::WEBLIB_NAME, "Choose a name for your weblib:")
            .validated_by(validate_weblib_name)
    };

    vec![
        app_name,
        weblib_name,
        Question::text(names::PS_HOSTNAME, "What's the PeopleSoft hostname (Ex: dev-ps.example.com)?")
            .validated_by(validate_hostname)
            .defaulting_to(defaults.hostname.as_ref()),
        Question::text(names::PS_ENVIRONMENT, "What's the PeopleSoft site name (Ex: csdev, csprd)?")
            .defaulting_to(defaults.environment.as_ref()),
        Question::text(names::PS_NODE, "What's the PeopleSoft node (Ex: SA, HRMS)?")
            .defaulting_to(defaults.node.as_ref()),
        Question::text(names::PS_USERNAME, "What's your PeopleSoft OPRID (Ex: PS)?")
            .defaulting_to(defaults.username.as_ref()),
        Question::text(names::PS_PASSWORD, "What's your PeopleSoft OPRID password (Ex: PS)?")
            .secret()
            .defaulting_to(defaults.password.as_ref()),
        Question {
            name: names::HAS_HTTP_AUTH,
            message: "Is your server under HTTP authentication?",
            kind: QuestionKind::Confirm,
            validate: None,
            default: DefaultValue::Fixed(Answer::Confirm(defaults.has_http_auth.unwrap_or(false))),
            when: None,
        },
        Question::text(names::HTTP_USERNAME, "What's your HTTP username?")
            .defaulting_to(defaults.http_username.as_ref())
            .shown_when(http_auth_enabled),
        Question::text(names::HTTP_PASSWORD, "What's your HTTP password?")
            .secret()
            .defaulting_to(defaults.http_password.as_ref())
            .shown_when(http_auth_enabled),
    ]
}
