mod fake_git;
mod fake_hub;

pub use fake_git::FakeGit;
pub use fake_hub::FakeHubClient;
