//! Config line parsing.
//!
//! Grammar: `path:username:groupname:mode`, exactly four colon-separated
//! fields. An empty group name means the user's primary group; the mode is an
//! octal string of permission bits.

use crate::constants;
use crate::error::SetupError;
use crate::models::DirSpec;
use crate::util::identity;
use std::path::PathBuf;

/// Parse one config line into a [`DirSpec`], resolving user and group names.
pub fn parse_line(line: &str) -> Result<DirSpec, SetupError> {
    let fields: Vec<&str> = line.split(':').collect();
    if fields.len() != constants::CONFIG_FIELDS {
        return Err(SetupError::FieldCount {
            found: fields.len(),
        });
    }
    let (raw_path, user_name, group_name, mode_str) =
        (fields[0], fields[1], fields[2], fields[3]);

    let path = strip_trailing_separators(raw_path);
    if path.is_empty() {
        return Err(SetupError::EmptyPath);
    }

    let user = identity::resolve_user(user_name)?;
    let gid = if group_name.is_empty() {
        user.primary_gid
    } else {
        identity::resolve_group(group_name)?
    };
    let mode = parse_mode(mode_str)?;

    Ok(DirSpec {
        path: PathBuf::from(path),
        uid: user.uid,
        gid,
        mode,
    })
}

/// Strip trailing path separators, keeping a bare `/` intact.
fn strip_trailing_separators(raw: &str) -> &str {
    let stripped = raw.trim_end_matches('/');
    if stripped.is_empty() && raw.starts_with('/') {
        "/"
    } else {
        stripped
    }
}

/// Parse an octal mode string into permission bits.
fn parse_mode(raw: &str) -> Result<u32, SetupError> {
    let invalid = || SetupError::InvalidMode {
        value: raw.to_string(),
    };
    let mode = u32::from_str_radix(raw, 8).map_err(|_| invalid())?;
    if mode & !constants::MODE_MASK != 0 {
        return Err(invalid());
    }
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::identity::current_user_name;
    use nix::unistd::{getegid, geteuid};

    #[test]
    fn test_parse_valid_line() {
        let user = current_user_name();
        let spec = parse_line(&format!("/srv/app:{}::750", user)).unwrap();
        assert_eq!(spec.path, PathBuf::from("/srv/app"));
        assert_eq!(spec.uid, geteuid().as_raw());
        assert_eq!(spec.mode, 0o750);
    }

    #[test]
    fn test_empty_group_uses_primary_gid() {
        let user = current_user_name();
        let spec = parse_line(&format!("/srv/app:{}::750", user)).unwrap();
        let resolved = crate::util::identity::resolve_user(&user).unwrap();
        assert_eq!(spec.gid, resolved.primary_gid);
    }

    #[test]
    fn test_explicit_group() {
        let user = current_user_name();
        let group = nix::unistd::Group::from_gid(getegid())
            .unwrap()
            .unwrap();
        let spec = parse_line(&format!("/srv/app:{}:{}:750", user, group.name)).unwrap();
        assert_eq!(spec.gid, group.gid.as_raw());
    }

    #[test]
    fn test_field_count_too_few() {
        let err = parse_line("/srv/app:user:group").unwrap_err();
        assert!(matches!(err, SetupError::FieldCount { found: 3 }));
    }

    #[test]
    fn test_field_count_too_many() {
        let err = parse_line("/srv/app:user:group:750:extra").unwrap_err();
        assert!(matches!(err, SetupError::FieldCount { found: 5 }));
    }

    #[test]
    fn test_strips_trailing_separators() {
        let user = current_user_name();
        let spec = parse_line(&format!("/srv/app///:{}::750", user)).unwrap();
        assert_eq!(spec.path, PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_root_path_preserved() {
        let user = current_user_name();
        let spec = parse_line(&format!("/:{}::755", user)).unwrap();
        assert_eq!(spec.path, PathBuf::from("/"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let user = current_user_name();
        let err = parse_line(&format!(":{}::750", user)).unwrap_err();
        assert!(matches!(err, SetupError::EmptyPath));
    }

    #[test]
    fn test_unknown_user() {
        let err = parse_line("/srv/app:no_such_user_zz9::750").unwrap_err();
        assert!(matches!(err, SetupError::UnknownUser { .. }));
    }

    #[test]
    fn test_unknown_group() {
        let user = current_user_name();
        let err = parse_line(&format!("/srv/app:{}:no_such_group_zz9:750", user)).unwrap_err();
        assert!(matches!(err, SetupError::UnknownGroup { .. }));
    }

    #[test]
    fn test_mode_not_octal() {
        let user = current_user_name();
        let err = parse_line(&format!("/srv/app:{}::rwx", user)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidMode { .. }));
        let err = parse_line(&format!("/srv/app:{}::798", user)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidMode { .. }));
    }

    #[test]
    fn test_mode_out_of_range() {
        let user = current_user_name();
        let err = parse_line(&format!("/srv/app:{}::17777", user)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidMode { .. }));
    }

    #[test]
    fn test_mode_with_special_bits() {
        let user = current_user_name();
        let spec = parse_line(&format!("/srv/app:{}::2750", user)).unwrap();
        assert_eq!(spec.mode, 0o2750);
    }
}
