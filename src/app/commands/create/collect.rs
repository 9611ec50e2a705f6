use crate::domain::{AppError, Answer, Answers, Question, QuestionKind};
use crate::ports::Prompter;

/// Ask every visible question in order, re-asking until each answer passes its rule.
pub(super) fn collect_answers<P: Prompter>(
    prompter: &P,
    questions: &[Question],
) -> Result<Answers, AppError> {
    let mut answers = Answers::default();

    for question in questions {
        if !question.is_visible(&answers) {
            continue;
        }

        let default = question.default_for(&answers);
        let answer = loop {
            let answer = prompter.ask(question, default.as_ref())?;
            match question.check(&answer) {
                Ok(()) => break answer,
                Err(reason) => prompter.reject(question, &reason),
            }
        };

        let answer = match (question.kind, answer) {
            (QuestionKind::Text, Answer::Text(value)) => Answer::text(value.trim()),
            (_, answer) => answer,
        };
        answers.insert(question.name, answer);
    }

    Ok(answers)
}
