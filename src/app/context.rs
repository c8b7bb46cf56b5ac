use crate::domain::HubCredentials;
use crate::ports::{Git, HubClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<H: HubClient, G: Git> {
    hub: H,
    git: G,
    credentials: Option<HubCredentials>,
}

impl<H: HubClient, G: Git> AppContext<H, G> {
    /// Create a new application context.
    pub fn new(hub: H, git: G, credentials: Option<HubCredentials>) -> Self {
        Self { hub, git, credentials }
    }

    /// Get a reference to the hub client.
    pub fn hub(&self) -> &H {
        &self.hub
    }

    /// Get a reference to the working copy's git adapter.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Credentials used for git transport, if any.
    pub fn credentials(&self) -> Option<&HubCredentials> {
        self.credentials.as_ref()
    }
}
