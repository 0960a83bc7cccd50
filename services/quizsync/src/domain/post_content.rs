//! Rewriting of the answer list inside the rendered content of a post.
//!
//! The content is parsed as an HTML fragment, modified in place and
//! serialized back, without ever touching the network.
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node};
use std::fmt;

use crate::domain::quiz_page::{self, selector};
use crate::domain::{AnswerList, TargetSection};

/// How the answers are laid out in the post: a heading of type `heading_tag`
/// followed by an `ol` with the class `list_class`.
#[derive(Debug, Clone)]
pub struct PostLayout {
    heading_tag: String,
    list_class: String,
}

/// The content of a post after its answer list has been replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub content: String,
    /// Whether a previous list was removed.
    pub removed: bool,
}

impl PostLayout {
    pub fn new(heading_tag: impl Into<String>, list_class: impl Into<String>) -> Self {
        PostLayout {
            heading_tag: heading_tag.into(),
            list_class: list_class.into(),
        }
    }

    /// Replace the list following the heading of `section` by a new list of `answers`.
    ///
    /// The element right after the heading is removed only if it is an `ol`.
    /// The new list is always inserted right after the heading.
    pub fn replace_answers(
        &self,
        content: &str,
        section: &TargetSection,
        answers: &AnswerList,
    ) -> Result<Replacement, Error> {
        let (list, item) = self.templates()?;
        let mut fragment = Html::parse_fragment(content);

        let (heading_id, stale_list) = {
            let heading = self.find_heading(&fragment, section)?;
            let stale_list = next_element_sibling(&heading)
                .filter(|sibling| sibling.value().name() == "ol")
                .map(|sibling| sibling.id());
            (heading.id(), stale_list)
        };

        if let Some(id) = stale_list {
            if let Some(mut node) = fragment.tree.get_mut(id) {
                node.detach();
            }
        }

        let mut heading = fragment
            .tree
            .get_mut(heading_id)
            .ok_or_else(|| Error::HeadingNotFound {
                context: format!("heading '{}' vanished from the document", section.title()),
            })?;
        let mut new_list = heading.insert_after(Node::Element(list));
        for answer in answers {
            let mut new_item = new_list.append(Node::Element(item.clone()));
            if !answer.is_empty() {
                new_item.append(Node::Text(Text {
                    text: answer.as_str().into(),
                }));
            }
        }

        Ok(Replacement {
            content: fragment.root_element().inner_html(),
            removed: stale_list.is_some(),
        })
    }

    /// The answers listed right after the heading of `section`, if the heading
    /// is followed by an `ol`. The text of each item is returned untrimmed.
    pub fn answers_after(
        &self,
        content: &str,
        section: &TargetSection,
    ) -> Result<Option<AnswerList>, Error> {
        let fragment = Html::parse_fragment(content);
        let heading = self.find_heading(&fragment, section)?;
        let item_selector = selector("li")?;

        let answers = next_element_sibling(&heading)
            .filter(|sibling| sibling.value().name() == "ol")
            .map(|list| {
                list.select(&item_selector)
                    .map(|li| li.text().collect::<String>())
                    .collect::<Vec<_>>()
            })
            .map(AnswerList::new);

        Ok(answers)
    }

    // First heading, in document order, matching the section title.
    fn find_heading<'a>(
        &self,
        fragment: &'a Html,
        section: &TargetSection,
    ) -> Result<ElementRef<'a>, Error> {
        let headings = selector(&self.heading_tag)?;
        fragment
            .select(&headings)
            .find(|heading| section.matches(&visible_text(heading)))
            .ok_or_else(|| Error::HeadingNotFound {
                context: format!(
                    "no <{}> contains '{}' ({})",
                    self.heading_tag,
                    section.title(),
                    section.heading()
                ),
            })
    }

    // Empty `ol` and `li` elements, cloned for each new list.
    fn templates(&self) -> Result<(Element, Element), Error> {
        let template = Html::parse_fragment(&format!(
            r#"<ol class="{}"><li></li></ol>"#,
            escape_attribute(&self.list_class)
        ));
        let list = template
            .select(&selector("ol")?)
            .next()
            .map(|ol| ol.value().clone());
        let item = template
            .select(&selector("li")?)
            .next()
            .map(|li| li.value().clone());
        list.zip(item).ok_or_else(|| Error::Template {
            context: format!("could not build a list with class '{}'", self.list_class),
        })
    }
}

/// Text pieces of an element, trimmed and joined by a space.
fn visible_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The next sibling which is an element, skipping text and comments.
fn next_element_sibling<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[derive(Debug)]
pub enum Error {
    HeadingNotFound { context: String },
    Selector { context: String },
    Template { context: String },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::HeadingNotFound { context } => {
                write!(fmt, "Heading Not Found: {context}")
            }
            Error::Selector { context } => {
                write!(fmt, "Selector: {context}")
            }
            Error::Template { context } => {
                write!(fmt, "List Template: {context}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<quiz_page::Error> for Error {
    fn from(err: quiz_page::Error) -> Self {
        match err {
            quiz_page::Error::Selector { context } => Error::Selector { context },
            quiz_page::Error::MissingMarkup { context } => Error::Template { context },
        }
    }
}
