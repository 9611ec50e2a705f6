use crate::domain::{AppError, Answer, Question};

/// Port for asking the user one question at a time.
pub trait Prompter {
    /// Show `question` pre-filled with `default` and return the raw answer.
    fn ask(&self, question: &Question, default: Option<&Answer>) -> Result<Answer, AppError>;

    /// Tell the user why their last answer was rejected before asking again.
    fn reject(&self, question: &Question, reason: &str);
}
