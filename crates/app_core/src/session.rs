use host_bridge::HostBridge;
use shared::domain::{HostUser, Identity, UserId};

/// Who is using the app, resolved once at mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    identity: Identity,
}

impl SessionContext {
    pub fn resolve(bridge: &HostBridge) -> Self {
        Self {
            identity: resolve_identity(bridge),
        }
    }

    pub fn guest() -> Self {
        Self {
            identity: Identity::guest(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

pub fn resolve_identity(bridge: &HostBridge) -> Identity {
    match bridge.identity_snapshot() {
        Some(user) => Identity {
            display_name: display_name(&user),
            user_id: Some(UserId(user.id)),
            username: user.username,
        },
        None => Identity::guest(),
    }
}

fn display_name(user: &HostUser) -> String {
    match &user.last_name {
        Some(last_name) if !last_name.trim().is_empty() => {
            format!("{} {}", user.first_name, last_name)
        }
        _ => user.first_name.clone(),
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
