pub mod answer_list;
pub mod ports;
pub mod post_content;
pub mod quiz_page;
pub mod target_section;
pub mod user_credentials;

pub use answer_list::AnswerList;
pub use post_content::{PostLayout, Replacement};
pub use quiz_page::QuizPage;
pub use target_section::TargetSection;
pub use user_credentials::Credentials;
