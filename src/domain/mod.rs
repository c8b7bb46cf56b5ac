pub mod error;
pub mod hub_config;
pub mod lfs;
pub mod model_card;
pub mod publish;
pub mod repo_id;

pub use error::AppError;
pub use hub_config::{HubConfig, HubCredentials};
pub use model_card::{CardParams, ModelCard};
pub use publish::{CardWrite, PublishOutcome, PublishRequest};
pub use repo_id::RepoId;
