use async_trait::async_trait;
use common::err_context::ErrorContextExt;
use common::settings::SourceSettings;
use reqwest::Client;
use tracing::{info, warn};

use crate::domain::ports::secondary::{QuizAnswers, QuizSource, QuizSourceError as Error};
use crate::domain::QuizPage;

/// Number of answers shown in log lines.
const SAMPLE_SIZE: usize = 3;

/// Scrapes the quiz answers from the page at `url`.
#[derive(Debug, Clone)]
pub struct QuizPageScraper {
    http_client: Client,
    url: String,
    answers_block_id: String,
    answers_list_class: String,
}

impl QuizPageScraper {
    pub fn new(settings: &SourceSettings) -> Result<QuizPageScraper, Error> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout))
            .user_agent(settings.user_agent.as_str())
            .build()
            .context("Could not build the quiz page http client")?;
        Ok(QuizPageScraper {
            http_client,
            url: settings.url.clone(),
            answers_block_id: settings.answers_block_id.clone(),
            answers_list_class: settings.answers_list_class.clone(),
        })
    }

    // The page is parsed in a synchronous function, since the parsed document
    // cannot be held across an await point.
    fn extract(&self, html: &str) -> Result<QuizAnswers, Error> {
        let page = QuizPage::parse(html);

        let english = page
            .english_answers(&self.answers_block_id)
            .context("Looking for the English answers")?;
        info!(
            count = english.len(),
            sample = ?english.sample(SAMPLE_SIZE),
            "English answers"
        );
        if english.is_empty() {
            warn!("no English answers found");
        }

        let russian = page
            .russian_answers(&self.answers_list_class)
            .context("Looking for the Russian answers")?;
        info!(
            count = russian.len(),
            sample = ?russian.sample(SAMPLE_SIZE),
            "Russian answers"
        );
        if russian.is_empty() {
            warn!("no Russian answers found");
        }

        Ok(QuizAnswers { english, russian })
    }
}

#[async_trait]
impl QuizSource for QuizPageScraper {
    #[tracing::instrument(name = "Scraping quiz answers", skip(self), fields(url = %self.url))]
    async fn fetch_answers(&self) -> Result<QuizAnswers, Error> {
        let html = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .context(format!("http client request to {}", self.url))?
            .error_for_status()
            .context("quiz page response")?
            .text()
            .await
            .context("quiz page body")?;

        self.extract(&html)
    }
}
