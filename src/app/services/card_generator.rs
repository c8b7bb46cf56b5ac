//! Model card generation and writing.

use std::fs;
use std::path::Path;

use crate::app::services::config_converter;
use crate::domain::publish::README;
use crate::domain::{AppError, CardParams, CardWrite, ModelCard, RepoId};

/// Build the model card for the converted configuration at `config_path`.
pub fn generate(config_path: &Path, repo_id: &RepoId) -> Result<ModelCard, AppError> {
    let config = config_converter::read_json(config_path)?;
    let (params, ignored) = CardParams::from_config(&config, repo_id, config_path)?;

    if !ignored.is_empty() {
        tracing::warn!(
            behavior = %params.environment_id,
            ignored = %ignored.join(", "),
            "configuration has several behaviors; the model card describes only the first"
        );
    }

    ModelCard::render(&params)
}

/// Write `card` as `dir/README.md` unless a README already exists.
///
/// An existing README is written back unchanged and the card is discarded.
pub fn write_if_absent(dir: &Path, card: &ModelCard) -> Result<CardWrite, AppError> {
    let readme_path = dir.join(README);

    if readme_path.exists() {
        let existing = fs::read_to_string(&readme_path)?;
        fs::write(&readme_path, existing)?;
        tracing::info!(path = %readme_path.display(), "keeping existing model card");
        return Ok(CardWrite::Preserved);
    }

    fs::write(&readme_path, card.as_str())?;
    tracing::info!(path = %readme_path.display(), "wrote generated model card");
    Ok(CardWrite::Generated)
}
