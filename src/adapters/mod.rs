pub mod git_command;
pub mod hub_client_http;
pub mod token_store;

pub use git_command::GitCommandAdapter;
pub use hub_client_http::HttpHubClient;
pub use token_store::HfTokenStore;
