//! mlpush: Package a trained ML-Agents run and publish it to a Hugging Face model repository.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{PublishOptions, publish, publish_with};
pub use domain::{AppError, CardWrite, PublishOutcome, RepoId};
