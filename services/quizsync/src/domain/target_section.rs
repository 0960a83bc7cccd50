use common::settings::SectionSettings;

/// Separates a section title from its trailing date, eg
/// "City Holder Daily Quiz Answer – November 21, 2025".
pub const TITLE_DELIMITER: char = '–';

/// A section of the blog post, identified by its heading, which must hold
/// the current list of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSection {
    label: String,
    heading: String,
}

impl TargetSection {
    pub fn new(label: impl Into<String>, heading: impl Into<String>) -> Self {
        TargetSection {
            label: label.into(),
            heading: heading.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// The part of the heading before the first en-dash, trimmed.
    pub fn title(&self) -> &str {
        self.heading
            .split(TITLE_DELIMITER)
            .next()
            .unwrap_or_default()
            .trim()
    }

    /// Returns true if a heading's visible text belongs to this section.
    ///
    /// Only the title is compared, so the date suffix may differ. Headings
    /// sharing the same title are indistinguishable.
    pub fn matches(&self, heading_text: &str) -> bool {
        heading_text.contains(self.title())
    }
}

impl From<SectionSettings> for TargetSection {
    fn from(settings: SectionSettings) -> Self {
        TargetSection::new(settings.label, settings.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn title_should_drop_the_date_suffix() {
        let section = TargetSection::new("EN", "City Holder Daily Quiz Answer – November 21, 2025");
        assert_that(&section.title()).is_equal_to("City Holder Daily Quiz Answer");
    }

    #[test]
    fn title_should_be_the_whole_heading_without_delimiter() {
        let section = TargetSection::new("EN", "  Daily Quiz  ");
        assert_that(&section.title()).is_equal_to("Daily Quiz");
    }

    #[test]
    fn matches_should_ignore_the_date() {
        let section = TargetSection::new("EN", "Foo – Nov 30");
        assert_that(&section.matches("Foo – Nov 21")).is_true();
        assert_that(&section.matches("Bar – Nov 30")).is_false();
    }

    #[test]
    fn matches_should_accept_longer_headings_sharing_the_title() {
        // "For Russia" headings contain the English title too.
        let section = TargetSection::new("EN", "City Holder Daily Quiz Answer – November 21, 2025");
        assert_that(&section.matches("City Holder Daily Quiz Answer For Russia – November 22, 2025"))
            .is_true();
    }

    #[test]
    fn matches_should_accept_any_heading_with_an_empty_title() {
        let section = TargetSection::new("EN", " – November 21, 2025");
        assert_that(&section.title()).is_equal_to("");
        assert_that(&section.matches("Anything at all")).is_true();
    }
}
