pub mod answer_computer;
pub mod link_extractor;
pub mod resource_fetcher;
pub mod submit_client;

pub use answer_computer::AnswerComputer;
pub use link_extractor::{ExtractedLinks, LinkExtractor, ResourceLink};
pub use resource_fetcher::ResourceFetcher;
pub use submit_client::SubmitClient;
