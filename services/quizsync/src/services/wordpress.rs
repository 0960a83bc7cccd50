use async_trait::async_trait;
use common::err_context::ErrorContextExt;
use common::settings::BlogSettings;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::info;

use crate::domain::ports::secondary::post_store::excerpt;
use crate::domain::ports::secondary::{Post, PostStore, PostStoreError as Error};
use crate::domain::Credentials;

/// Status sent along with the new content; publishing an already published
/// post leaves it published.
pub const PUBLISH_STATUS: &str = "publish";

#[derive(Debug, Clone)]
pub struct WordPressClient {
    // This is the client end of a connection to the WordPress REST API.
    http_client: Client,
    // URL of the posts collection, a post is at `{posts_url}/{id}`
    posts_url: String,
    credentials: Credentials,
}

impl WordPressClient {
    pub fn new(settings: &BlogSettings, credentials: Credentials) -> Result<WordPressClient, Error> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout))
            .user_agent(settings.user_agent.as_str())
            .build()
            .context("Could not build the blog http client")?;
        Ok(WordPressClient {
            http_client,
            posts_url: settings.posts_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn post_url(&self, id: u64) -> String {
        format!("{}/{}", self.posts_url, id)
    }
}

#[async_trait]
impl PostStore for WordPressClient {
    #[tracing::instrument(name = "Fetching post", skip(self))]
    async fn fetch_post(&self, id: u64) -> Result<Post, Error> {
        let url = self.post_url(id);

        let response = self
            .http_client
            .get(&url)
            .header(AUTHORIZATION, self.credentials.basic_authorization())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context(format!("http client request to {url}"))?;

        info!(status = response.status().as_u16(), "fetch status");
        let response = successful(response, format!("Could not fetch post {id}")).await?;

        response.json::<Post>().await.map_err(|err| Error::Decoding {
            context: format!("Could not decode post {id}"),
            source: err,
        })
    }

    #[tracing::instrument(name = "Publishing post", skip(self, content))]
    async fn publish_post(&self, id: u64, content: String) -> Result<(), Error> {
        let url = self.post_url(id);

        let request_body = PublishPostRequest {
            content: &content,
            status: PUBLISH_STATUS,
        };

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, self.credentials.basic_authorization())
            .header(ACCEPT, "application/json")
            .json(&request_body)
            .send()
            .await
            .context(format!("http client request to {url}"))?;

        info!(status = response.status().as_u16(), "update status");
        successful(response, format!("Could not update post {id}")).await?;

        Ok(())
    }
}

// Turns a non success response into an error carrying an excerpt of its body.
async fn successful(response: Response, context: String) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        context,
        status: status.as_u16(),
        body: excerpt(&body),
    })
}

#[derive(Serialize)]
struct PublishPostRequest<'a> {
    content: &'a str,
    status: &'a str,
}

#[cfg(test)]
mod tests {
    use common::settings::{BlogSettings, SectionSettings, SectionsSettings};
    use fake::faker::internet::en::{Password, Username};
    use fake::Fake;
    use speculoos::prelude::*;
    use wiremock::matchers::{any, body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::domain::ports::secondary::{PostStore, PostStoreError};
    use crate::domain::Credentials;
    use crate::services::wordpress::WordPressClient;

    const POST_ID: u64 = 303976;

    fn blog_settings(posts_url: String, timeout: u64) -> BlogSettings {
        BlogSettings {
            posts_url,
            post_id: POST_ID,
            user_agent: "Mozilla/5.0".to_string(),
            timeout,
            heading_tag: "h2".to_string(),
            list_class: "wp-block-list".to_string(),
            username_var: "WP_USERNAME".to_string(),
            password_var: "WP_APP_PASSWORD".to_string(),
            sections: SectionsSettings {
                en: SectionSettings {
                    label: "EN".to_string(),
                    heading: "Quiz – today".to_string(),
                },
                ru: SectionSettings {
                    label: "RU".to_string(),
                    heading: "Quiz For Russia – today".to_string(),
                },
            },
        }
    }

    fn credentials() -> Credentials {
        Credentials::new(Username().fake::<String>(), Password(8..16).fake::<String>())
    }

    async fn client_for(mock_server: &MockServer, timeout: u64) -> (WordPressClient, Credentials) {
        let credentials = credentials();
        let settings = blog_settings(format!("{}/wp-json/wp/v2/posts", mock_server.uri()), timeout);
        let client = WordPressClient::new(&settings, credentials.clone()).expect("blog client");
        (client, credentials)
    }

    #[tokio::test]
    async fn fetch_post_should_send_basic_authentication() {
        // Arrange
        let mock_server = MockServer::start().await;
        let (client, credentials) = client_for(&mock_server, 10).await;

        Mock::given(method("GET"))
            .and(path(format!("/wp-json/wp/v2/posts/{POST_ID}")))
            .and(header("Authorization", credentials.basic_authorization().as_str()))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": POST_ID,
                "content": { "rendered": "<h2>Quiz</h2>" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        // Act
        let post = client.fetch_post(POST_ID).await.expect("post");

        // Assert
        assert_that(&post.content.rendered).is_equal_to("<h2>Quiz</h2>".to_string());
    }

    #[tokio::test]
    async fn fetch_post_fails_if_the_server_returns_404() {
        let mock_server = MockServer::start().await;
        let (client, _) = client_for(&mock_server, 10).await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(404).set_body_string("x".repeat(1000)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client.fetch_post(POST_ID).await;

        match outcome {
            Err(PostStoreError::Status { status, body, .. }) => {
                assert_that(&status).is_equal_to(404);
                assert_that(&body.len()).is_equal_to(300);
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_post_fails_if_the_body_is_not_json() {
        let mock_server = MockServer::start().await;
        let (client, _) = client_for(&mock_server, 10).await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client.fetch_post(POST_ID).await;

        assert!(matches!(outcome, Err(PostStoreError::Decoding { .. })));
    }

    #[tokio::test]
    async fn publish_post_should_post_content_with_publish_status() {
        let mock_server = MockServer::start().await;
        let (client, credentials) = client_for(&mock_server, 10).await;

        Mock::given(method("POST"))
            .and(path(format!("/wp-json/wp/v2/posts/{POST_ID}")))
            .and(header("Authorization", credentials.basic_authorization().as_str()))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({
                "content": "<h2>Quiz</h2><ol><li>Japan</li></ol>",
                "status": "publish"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client
            .publish_post(POST_ID, "<h2>Quiz</h2><ol><li>Japan</li></ol>".to_string())
            .await;

        assert_that(&outcome).is_ok();
    }

    #[tokio::test]
    async fn publish_post_fails_if_the_server_returns_500() {
        let mock_server = MockServer::start().await;
        let (client, _) = client_for(&mock_server, 10).await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client.publish_post(POST_ID, "<p>x</p>".to_string()).await;

        assert_that(&outcome).is_err();
    }

    #[tokio::test]
    async fn publish_post_times_out_if_the_server_takes_too_long() {
        // The client timeout is shorter than the delay of the mock server.
        let mock_server = MockServer::start().await;
        let (client, _) = client_for(&mock_server, 1).await;

        let response = ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3));

        Mock::given(any())
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client.publish_post(POST_ID, "<p>x</p>".to_string()).await;

        assert!(matches!(outcome, Err(PostStoreError::Connection { .. })));
    }
}
