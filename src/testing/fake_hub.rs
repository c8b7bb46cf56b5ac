use std::sync::Mutex;

use url::Url;

use crate::domain::{AppError, RepoId};
use crate::ports::{HubClient, HubIdentity};

pub struct FakeHubClient {
    url: Url,
    failure: Mutex<Option<AppError>>,
    pub created: Mutex<Vec<(RepoId, bool)>>,
    pub whoami_calls: Mutex<usize>,
}

impl FakeHubClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            failure: Mutex::new(None),
            created: Mutex::new(Vec::new()),
            whoami_calls: Mutex::new(0),
        }
    }

    /// `create_repo` fails once with `error`.
    pub fn failing(error: AppError) -> Self {
        let hub = Self::new(Url::parse("https://hub.invalid/unused").unwrap());
        *hub.failure.lock().unwrap() = Some(error);
        hub
    }
}

impl HubClient for FakeHubClient {
    fn create_repo(&self, repo_id: &RepoId, private: bool) -> Result<Url, AppError> {
        if let Some(error) = self.failure.lock().unwrap().take() {
            return Err(error);
        }
        self.created.lock().unwrap().push((repo_id.clone(), private));
        Ok(self.url.clone())
    }

    fn whoami(&self) -> Result<HubIdentity, AppError> {
        *self.whoami_calls.lock().unwrap() += 1;
        Ok(HubIdentity {
            name: "acme-bot".to_string(),
            fullname: Some("Acme Bot".to_string()),
            email: Some("bot@acme.test".to_string()),
        })
    }
}
