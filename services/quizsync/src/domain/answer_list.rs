use serde::{Deserialize, Serialize};

/// Number of leading answers compared with the guard.
pub const GUARD_LENGTH: usize = 2;

/// An ordered list of quiz answers. The position of an answer is the number
/// of the question it answers, so order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerList(Vec<String>);

impl AnswerList {
    pub fn new(answers: Vec<String>) -> Self {
        AnswerList(answers)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `n` answers (or fewer), used in log lines.
    pub fn sample(&self, n: usize) -> &[String] {
        &self.0[..n.min(self.0.len())]
    }

    /// Returns true if the first [`GUARD_LENGTH`] answers are exactly
    /// `guard`, which means this list has already been published.
    ///
    /// The comparison is case and order sensitive. Any difference, including
    /// in length, means the list is new: a guard that is not a pair never
    /// matches a list holding at least two answers.
    pub fn matches_guard(&self, guard: &[String]) -> bool {
        self.sample(GUARD_LENGTH) == guard
    }
}

impl From<Vec<String>> for AnswerList {
    fn from(answers: Vec<String>) -> Self {
        AnswerList(answers)
    }
}

impl<'a> IntoIterator for &'a AnswerList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
