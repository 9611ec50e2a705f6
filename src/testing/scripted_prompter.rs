use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::{AppError, Answer, Question};
use crate::ports::Prompter;

/// Prompter replaying queued answers per question name.
///
/// A question with no queued answer takes its default; with neither, `ask` fails.
#[derive(Default)]
pub struct ScriptedPrompter {
    queued: RefCell<Vec<(&'static str, VecDeque<Answer>)>>,
    asked: RefCell<Vec<&'static str>>,
    rejections: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, name: &'static str, answer: Answer) -> Self {
        {
            let mut queued = self.queued.borrow_mut();
            match queued.iter_mut().find(|(key, _)| *key == name) {
                Some((_, answers)) => answers.push_back(answer),
                None => queued.push((name, VecDeque::from([answer]))),
            }
        }
        self
    }

    pub fn was_asked(&self, name: &str) -> bool {
        self.asked.borrow().iter().any(|asked| *asked == name)
    }

    pub fn rejections(&self) -> Vec<String> {
        self.rejections.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &Question, default: Option<&Answer>) -> Result<Answer, AppError> {
        self.asked.borrow_mut().push(question.name);
        let next = self
            .queued
            .borrow_mut()
            .iter_mut()
            .find(|(key, _)| *key == question.name)
            .and_then(|(_, answers)| answers.pop_front());

        next.or_else(|| default.cloned())
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for {}", question.name)))
    }

    fn reject(&self, _question: &Question, reason: &str) {
        self.rejections.borrow_mut().push(reason.to_string());
    }
}
