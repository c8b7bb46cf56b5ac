mod git;
mod hub_client;

pub use git::Git;
pub use hub_client::{HubClient, HubIdentity};
