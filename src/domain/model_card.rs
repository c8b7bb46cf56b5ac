//! Model card rendering.
//!
//! The card is derived from the converted run configuration: the first
//! behavior under `behaviors` names the environment, and its `trainer_type`
//! names the algorithm. Rendering itself is a pure function over
//! [`CardParams`] so it can be exercised without touching the filesystem.

use std::path::Path;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};
use serde_json::Value;

use crate::domain::{AppError, RepoId};

const TEMPLATE_NAME: &str = "model_card.md.j2";
const TEMPLATE: &str = include_str!("../assets/model_card.md.j2");

pub const BEHAVIORS_KEY: &str = "behaviors";
pub const TRAINER_TYPE_KEY: &str = "trainer_type";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Values interpolated into the model card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardParams {
    pub environment_id: String,
    pub trainer_type: String,
    pub repo_id: String,
}

impl CardParams {
    /// Extract card parameters from a run configuration document.
    ///
    /// Returns the parameters together with the names of any further
    /// behaviors that were ignored because only the first one is described.
    pub fn from_config(
        config: &Value,
        repo_id: &RepoId,
        config_path: &Path,
    ) -> Result<(Self, Vec<String>), AppError> {
        let missing = || AppError::MissingBehavior { path: config_path.to_path_buf() };

        let behaviors = config.get(BEHAVIORS_KEY).and_then(Value::as_object).ok_or_else(missing)?;
        let mut names = behaviors.keys();
        let environment_id = names.next().ok_or_else(missing)?.clone();
        let ignored = names.cloned().collect();

        let trainer_type = behaviors
            .get(&environment_id)
            .and_then(|behavior| behavior.get(TRAINER_TYPE_KEY))
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::MissingField {
                behavior: environment_id.clone(),
                field: TRAINER_TYPE_KEY.to_string(),
            })?
            .to_string();

        Ok((Self { environment_id, trainer_type, repo_id: repo_id.to_string() }, ignored))
    }
}

/// Rendered model card text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCard(String);

impl ModelCard {
    pub fn render(params: &CardParams) -> Result<Self, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(
            TEMPLATE,
            context! {
                environment_id => params.environment_id.as_str(),
                trainer_type => params.trainer_type.as_str(),
                repo_id => params.repo_id.as_str(),
            },
        )
        .map(ModelCard)
        .map_err(|err| AppError::Template {
            template: TEMPLATE_NAME.to_string(),
            details: err.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
