mod error;
pub mod opts;
pub mod publisher;

pub use self::error::Error;
pub use publisher::BlogPublisher;

use common::err_context::ErrorContextExt;
use common::settings::{SectionsSettings, Settings, SourceSettings};
use tracing::info;

use crate::domain::ports::secondary::{QuizAnswers, QuizSource, SectionOutcome, SectionPublisher};
use crate::domain::TargetSection;
use crate::services::scraper::QuizPageScraper;

/// The two sections of the post, each receiving its own answer list.
#[derive(Debug, Clone)]
pub struct Sections {
    pub en: TargetSection,
    pub ru: TargetSection,
}

impl From<SectionsSettings> for Sections {
    fn from(settings: SectionsSettings) -> Self {
        Sections {
            en: settings.en.into(),
            ru: settings.ru.into(),
        }
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    /// The scraped answers were already published, nothing was written.
    Unchanged,
    /// One outcome per section, in the order they were published.
    Published(Vec<SectionOutcome>),
}

impl RunOutcome {
    /// Number of sections actually written. Failed sections are logged where
    /// they fail.
    pub fn published_sections(&self) -> usize {
        match self {
            RunOutcome::Unchanged => 0,
            RunOutcome::Published(outcomes) => outcomes
                .iter()
                .filter(|outcome| outcome.is_published())
                .count(),
        }
    }
}

/// Scrape the quiz answers, without publishing them.
pub async fn scrape(settings: &SourceSettings) -> Result<QuizAnswers, Error> {
    let source = QuizPageScraper::new(settings).context("Building the quiz page scraper")?;
    let answers = source
        .fetch_answers()
        .await
        .context("Scraping the quiz answers")?;
    Ok(answers)
}

/// Scrape the quiz answers and publish them in the blog post if they changed.
pub async fn run(settings: Settings) -> Result<RunOutcome, Error> {
    let Settings {
        source,
        blog,
        guard,
        mode: _,
    } = settings;

    let scraper = QuizPageScraper::new(&source).context("Building the quiz page scraper")?;
    let sections = Sections::from(blog.sections.clone());
    let publisher = BlogPublisher::new(blog);

    sync_answers(&scraper, &publisher, &guard, sections).await
}

/// Fetch the answers from `source` and, unless the first two English answers
/// are exactly `guard`, publish the English then the Russian answers.
///
/// Only a scraping failure is an error. Each section reports its own outcome,
/// a failing section does not prevent the other from being published.
pub async fn sync_answers<Q, P>(
    source: &Q,
    publisher: &P,
    guard: &[String],
    sections: Sections,
) -> Result<RunOutcome, Error>
where
    Q: QuizSource + Sync + ?Sized,
    P: SectionPublisher + Sync + ?Sized,
{
    let QuizAnswers { english, russian } = source
        .fetch_answers()
        .await
        .context("Scraping the quiz answers")?;

    if english.matches_guard(guard) {
        info!(?guard, "answers are unchanged, skipping update");
        return Ok(RunOutcome::Unchanged);
    }

    info!(?guard, "answers changed, updating both sections");
    let Sections { en, ru } = sections;
    let outcomes = vec![
        publisher.publish_section(en, english).await,
        publisher.publish_section(ru, russian).await,
    ];

    Ok(RunOutcome::Published(outcomes))
}
