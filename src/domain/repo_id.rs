use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Remote repository identifier in `organization/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    organization: String,
    name: String,
}

impl RepoId {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let mut parts = value.split('/');
        let (Some(organization), Some(name), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(AppError::InvalidRepoId(value.to_string()));
        };

        if !is_valid_segment(organization) || !is_valid_segment(name) {
            return Err(AppError::InvalidRepoId(value.to_string()));
        }

        Ok(Self { organization: organization.to_string(), name: name.to_string() })
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.name)
    }
}

impl FromStr for RepoId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
