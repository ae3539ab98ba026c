//! Identity collaborator
//!
//! Session management is out of this server's scope; the engine only needs
//! a name to stamp onto `created_by`. The trait keeps that seam explicit so
//! a real session layer can slot in later.

/// Provides the acting user's name
pub trait IdentityProvider: Send + Sync {
    fn current_user_name(&self) -> String;
}

/// Fixed identity taken from configuration
pub struct ConfiguredIdentity {
    user_name: String,
}

impl ConfiguredIdentity {
    pub fn new(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
        }
    }
}

impl IdentityProvider for ConfiguredIdentity {
    fn current_user_name(&self) -> String {
        self.user_name.clone()
    }
}
