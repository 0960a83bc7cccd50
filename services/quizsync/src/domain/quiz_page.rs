//! Extraction of the answer lists from the quiz page markup.
use scraper::{ElementRef, Html, Selector};
use std::fmt;

use crate::domain::AnswerList;

/// The quiz page, parsed.
pub struct QuizPage {
    document: Html,
}

impl QuizPage {
    pub fn parse(html: &str) -> Self {
        QuizPage {
            document: Html::parse_document(html),
        }
    }

    /// The English answers, one per line of the `pre` block with id
    /// `block_id`, with their ordinal prefix ("01.") removed.
    pub fn english_answers(&self, block_id: &str) -> Result<AnswerList, Error> {
        let selector = selector("pre")?;
        let block = self
            .document
            .select(&selector)
            .find(|pre| pre.value().id() == Some(block_id))
            .ok_or_else(|| Error::MissingMarkup {
                context: format!("no <pre id='{block_id}'> holding the English answers"),
            })?;

        let text = block.text().collect::<Vec<_>>().join("\n");
        let answers = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| strip_ordinal(line).to_string())
            .collect::<Vec<_>>();

        Ok(AnswerList::new(answers))
    }

    /// The Russian answers, one per non empty `li` of the first `ol` with
    /// class `list_class`.
    pub fn russian_answers(&self, list_class: &str) -> Result<AnswerList, Error> {
        let list_selector = selector("ol")?;
        let item_selector = selector("li")?;
        let list = self
            .document
            .select(&list_selector)
            .find(|ol| ol.value().classes().any(|class| class == list_class))
            .ok_or_else(|| Error::MissingMarkup {
                context: format!("no <ol class='{list_class}'> holding the Russian answers"),
            })?;

        let answers = list
            .select(&item_selector)
            .map(|li| trimmed_text(&li))
            .filter(|answer| !answer.is_empty())
            .collect::<Vec<_>>();

        Ok(AnswerList::new(answers))
    }
}

/// Remove a leading ordinal, everything up to and including the first '.',
/// eg "01. Japan" gives "Japan". Lines without '.' are returned unchanged.
pub fn strip_ordinal(line: &str) -> &str {
    match line.split_once('.') {
        Some((_, answer)) => answer.trim(),
        None => line.trim(),
    }
}

fn trimmed_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub(crate) fn selector(selectors: &str) -> Result<Selector, Error> {
    Selector::parse(selectors).map_err(|err| Error::Selector {
        context: format!("invalid selector '{selectors}': {err:?}"),
    })
}

#[derive(Debug)]
pub enum Error {
    /// An expected element is absent from the page
    MissingMarkup { context: String },
    Selector { context: String },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingMarkup { context } => {
                write!(fmt, "Missing Markup: {context}")
            }
            Error::Selector { context } => {
                write!(fmt, "Selector: {context}")
            }
        }
    }
}

impl std::error::Error for Error {}
