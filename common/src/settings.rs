use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

/// Where the quiz answers are scraped from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    pub url: String,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout: u64,
    /// id of the `pre` block holding the English answers.
    pub answers_block_id: String,
    /// class of the `ol` holding the Russian answers.
    pub answers_list_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSettings {
    /// Label used in log lines, eg "EN".
    pub label: String,
    /// Heading text of the section, only the part before the first en-dash is matched.
    pub heading: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionsSettings {
    pub en: SectionSettings,
    pub ru: SectionSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSettings {
    /// URL of the WordPress posts collection, eg `https://example.com/wp-json/wp/v2/posts`.
    pub posts_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub post_id: u64,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout: u64,
    pub heading_tag: String,
    pub list_class: String,
    /// Names of the environment variables holding the credentials.
    pub username_var: String,
    pub password_var: String,
    pub sections: SectionsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub source: SourceSettings,
    pub blog: BlogSettings,
    /// Leading answers of an already published list.
    pub guard: Vec<String>,
    pub mode: String,
}
