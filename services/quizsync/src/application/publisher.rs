use async_trait::async_trait;
use common::err_context::ErrorContextExt;
use common::settings::BlogSettings;
use tracing::{error, info};

use crate::domain::ports::secondary::{
    PostStore, PublishError as Error, SectionOutcome, SectionPublisher, SectionReport,
};
use crate::domain::{AnswerList, Credentials, PostLayout, Replacement, TargetSection};
use crate::services::wordpress::WordPressClient;

/// Publishes answer lists in the blog post, through the WordPress REST API.
///
/// Credentials are read from the environment for every section, so a
/// missing credential stops a section before any request is made.
#[derive(Debug, Clone)]
pub struct BlogPublisher {
    settings: BlogSettings,
    layout: PostLayout,
}

impl BlogPublisher {
    pub fn new(settings: BlogSettings) -> Self {
        let layout = PostLayout::new(settings.heading_tag.as_str(), settings.list_class.as_str());
        BlogPublisher { settings, layout }
    }

    async fn update(
        &self,
        section: &TargetSection,
        answers: &AnswerList,
    ) -> Result<SectionReport, Error> {
        let credentials =
            Credentials::from_env(&self.settings.username_var, &self.settings.password_var)
                .context("Reading the blog credentials")?;
        let store = WordPressClient::new(&self.settings, credentials)
            .context("Building the blog client")?;
        update_section(&store, self.settings.post_id, &self.layout, section, answers).await
    }
}

#[async_trait]
impl SectionPublisher for BlogPublisher {
    #[tracing::instrument(
        name = "Publishing section",
        skip(self, section, answers),
        fields(label = %section.label())
    )]
    async fn publish_section(&self, section: TargetSection, answers: AnswerList) -> SectionOutcome {
        let result = self.update(&section, &answers).await;
        match &result {
            Ok(report) => info!(
                answers = report.answers,
                removed_previous = report.removed_previous,
                "post updated"
            ),
            Err(err) => error!("post not updated: {err}"),
        }
        SectionOutcome {
            label: section.label().to_string(),
            result,
        }
    }
}

/// Read the post, replace the list under the heading of `section` by
/// `answers`, and write the post back.
///
/// Nothing is written if the post cannot be read, has no content, or has no
/// heading for the section.
pub async fn update_section<S>(
    store: &S,
    post_id: u64,
    layout: &PostLayout,
    section: &TargetSection,
    answers: &AnswerList,
) -> Result<SectionReport, Error>
where
    S: PostStore + Sync + ?Sized,
{
    let post = store
        .fetch_post(post_id)
        .await
        .context(format!("Fetching post {post_id}"))?;

    let content = post.content.rendered;
    if content.trim().is_empty() {
        return Err(Error::MissingContent {
            context: format!("post {post_id} has no rendered content"),
        });
    }

    let Replacement { content, removed } = layout
        .replace_answers(&content, section, answers)
        .context(format!("Replacing the answers under '{}'", section.title()))?;
    info!(removed, "removed previous list after heading");

    store
        .publish_post(post_id, content)
        .await
        .context(format!("Updating post {post_id}"))?;

    Ok(SectionReport {
        removed_previous: removed,
        answers: answers.len(),
    })
}
