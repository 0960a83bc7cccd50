pub mod post_store;
pub mod quiz_source;
pub mod section_publisher;

pub use post_store::{Error as PostStoreError, Post, PostStore, RenderedContent};
pub use quiz_source::{Error as QuizSourceError, QuizAnswers, QuizSource};
pub use section_publisher::{
    Error as PublishError, SectionOutcome, SectionPublisher, SectionReport,
};

#[cfg(test)]
pub use post_store::MockPostStore;

#[cfg(test)]
pub use quiz_source::MockQuizSource;

#[cfg(test)]
pub use section_publisher::MockSectionPublisher;
