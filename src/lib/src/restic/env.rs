//! Presence check for the environment restic needs to open the repository
//!

use crate::constants;
use crate::error::AnchorError;

/// Fail fast when restic could not possibly open the repository. Values are
/// never read, restic validates them itself.
pub fn check() -> Result<(), AnchorError> {
    check_with(|name| std::env::var_os(name).is_some())
}

/// Same check with the probe injected so tests never have to touch the
/// process environment.
pub fn check_with<F>(is_set: F) -> Result<(), AnchorError>
where
    F: Fn(&str) -> bool,
{
    let has_repository = is_set(constants::RESTIC_REPOSITORY_ENV)
        || is_set(constants::RESTIC_REPOSITORY_FILE_ENV);
    let has_password =
        is_set(constants::RESTIC_PASSWORD_ENV) || is_set(constants::RESTIC_PASSWORD_FILE_ENV);

    if !has_repository || !has_password {
        return Err(AnchorError::missing_restic_env(has_repository, has_password));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::AnchorError;
    use crate::restic::env;

    #[test]
    fn test_check_passes_with_direct_values() -> Result<(), AnchorError> {
        env::check_with(|name| name == "RESTIC_REPOSITORY" || name == "RESTIC_PASSWORD")
    }

    #[test]
    fn test_check_passes_with_file_variants() -> Result<(), AnchorError> {
        env::check_with(|name| {
            name == "RESTIC_REPOSITORY_FILE" || name == "RESTIC_PASSWORD_FILE"
        })
    }

    #[test]
    fn test_check_fails_without_a_password() {
        let result = env::check_with(|name| name == "RESTIC_REPOSITORY");
        assert!(matches!(result, Err(AnchorError::Usage(_))));
    }

    #[test]
    fn test_check_fails_with_nothing_set() {
        let result = env::check_with(|_| false);
        let err = result.unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("RESTIC_REPOSITORY"));
        assert!(msg.contains("RESTIC_PASSWORD"));
    }
}
