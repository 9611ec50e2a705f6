use dialoguer::{Confirm, Error as DialoguerError, Input, Password};

use crate::domain::{AppError, Answer, Question, QuestionKind};
use crate::ports::Prompter;

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

fn prompt_error(question: &Question, err: DialoguerError) -> AppError {
    AppError::Prompt(format!("{}: {}", question.name, err))
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, question: &Question, default: Option<&Answer>) -> Result<Answer, AppError> {
        match question.kind {
            QuestionKind::Confirm => {
                let default = matches!(default, Some(Answer::Confirm(true)));
                Confirm::new()
                    .with_prompt(question.message)
                    .default(default)
                    .interact()
                    .map(Answer::Confirm)
                    .map_err(|e| prompt_error(question, e))
            }
            QuestionKind::Text => {
                let mut input = Input::<String>::new().with_prompt(question.message);
                if let Some(Answer::Text(value)) = default {
                    input = input.default(value.clone());
                }
                if let Some(validate) = question.validate {
                    input = input.validate_with(move |value: &String| validate(value));
                }
                input.interact_text().map(Answer::Text).map_err(|e| prompt_error(question, e))
            }
            QuestionKind::Secret => {
                let saved = match default {
                    Some(Answer::Text(value)) if !value.is_empty() => Some(value.clone()),
                    _ => None,
                };
                let prompt = match saved {
                    Some(_) => format!("{} (leave blank to keep the saved value)", question.message),
                    None => question.message.to_string(),
                };
                let value = Password::new()
                    .with_prompt(prompt)
                    .allow_empty_password(saved.is_some())
                    .interact()
                    .map_err(|e| prompt_error(question, e))?;
                Ok(Answer::Text(match saved {
                    Some(saved) if value.is_empty() => saved,
                    _ => value,
                }))
            }
        }
    }

    fn reject(&self, _question: &Question, reason: &str) {
        eprintln!("✖ {}", reason);
    }
}
