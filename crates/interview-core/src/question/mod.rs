mod bank;
#[allow(clippy::module_inception)]
mod question;

pub use {
    bank::QuestionBank,
    question::{Question, QuestionCategory},
};
