//! User and group name resolution against the system identity database.

use crate::error::SetupError;
use nix::unistd::{Group, User};

/// A resolved account: numeric uid plus the account's primary gid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedUser {
    pub uid: u32,
    pub primary_gid: u32,
}

/// Resolve a user name to its uid and primary gid.
pub fn resolve_user(name: &str) -> Result<ResolvedUser, SetupError> {
    let user = User::from_name(name)
        .map_err(|source| SetupError::Lookup {
            name: name.to_string(),
            source,
        })?
        .ok_or_else(|| SetupError::UnknownUser {
            name: name.to_string(),
        })?;
    Ok(ResolvedUser {
        uid: user.uid.as_raw(),
        primary_gid: user.gid.as_raw(),
    })
}

/// Resolve a group name to its gid.
pub fn resolve_group(name: &str) -> Result<u32, SetupError> {
    let group = Group::from_name(name)
        .map_err(|source| SetupError::Lookup {
            name: name.to_string(),
            source,
        })?
        .ok_or_else(|| SetupError::UnknownGroup {
            name: name.to_string(),
        })?;
    Ok(group.gid.as_raw())
}

/// Name of the account running the tests.
#[cfg(test)]
pub(crate) fn current_user_name() -> String {
    User::from_uid(nix::unistd::geteuid())
        .unwrap()
        .unwrap()
        .name
}
