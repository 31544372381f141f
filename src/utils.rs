use crate::error::Result;
use nix::unistd::getuid;
use std::env;

pub const CCACHE_ENVVAR: &str = "KRB5CCNAME";

const FILE_CCACHE_TYPE: &str = "FILE";

/// Path of the credentials cache to read: the one given by arguments, or the
/// one of KRB5CCNAME, or the default MIT location.
pub fn get_ticket_file(args_file: Option<String>) -> Result<String> {
    if let Some(file) = args_file {
        return ccache_name_to_path(&file);
    }

    if let Some(file) = get_env_ticket_file() {
        return ccache_name_to_path(&file);
    }

    return Ok(default_ticket_file());
}

pub fn get_env_ticket_file() -> Option<String> {
    return env::var(CCACHE_ENVVAR).ok();
}

pub fn default_ticket_file() -> String {
    return format!("/tmp/krb5cc_{}", getuid());
}

/// Converts a ccache name as `FILE:/tmp/krb5cc_1000` into a file path. Only
/// file caches can be read.
pub fn ccache_name_to_path(name: &str) -> Result<String> {
    if let Some((residence, path)) = name.split_once(':') {
        if !residence.contains('/') {
            if residence.eq_ignore_ascii_case(FILE_CCACHE_TYPE) {
                return Ok(path.to_string());
            }

            return Err(format!(
                "Unsupported credentials cache type '{}' of '{}', \
                 only FILE caches can be read",
                residence, name
            ))?;
        }
    }

    return Ok(name.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ccache_name_to_path() {
        assert_eq!(
            "/tmp/krb5cc_1000",
            ccache_name_to_path("FILE:/tmp/krb5cc_1000").unwrap()
        );
        assert_eq!(
            "/tmp/krb5cc_1000",
            ccache_name_to_path("/tmp/krb5cc_1000").unwrap()
        );
        assert_eq!(
            "alice.ccache",
            ccache_name_to_path("alice.ccache").unwrap()
        );
        assert_eq!(
            "./dir:1/cache",
            ccache_name_to_path("./dir:1/cache").unwrap()
        );
    }

    #[test]
    fn test_ccache_name_unsupported_types() {
        assert!(ccache_name_to_path("KEYRING:persistent:1000").is_err());
        assert!(ccache_name_to_path("KCM:1000").is_err());
        assert!(ccache_name_to_path("DIR:/run/user/1000/krb5cc").is_err());
    }

    #[test]
    fn test_get_ticket_file_prefers_arguments() {
        assert_eq!(
            "/tmp/mine",
            get_ticket_file(Some("FILE:/tmp/mine".to_string())).unwrap()
        );
    }

    #[test]
    fn test_default_ticket_file() {
        assert!(default_ticket_file().starts_with("/tmp/krb5cc_"));
    }
}
