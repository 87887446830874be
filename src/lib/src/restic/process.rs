//! The one place that actually spawns restic
//!
//! The contract with restic's CLI: exit code 1 with a JSON body on stderr is
//! a proper error whose `message` is surfaced to the user, any other nonzero
//! exit is unexpected, and a successful exit must leave stderr empty.
//!

use serde::Deserialize;
use std::process::Command;

use crate::constants;
use crate::error::AnchorError;

#[derive(Deserialize, Debug)]
struct ResticErrorBody {
    message: String,
}

/// The restic executable, `restic` on the PATH unless `RESTIC_BIN` points
/// somewhere else.
pub fn restic_bin() -> String {
    std::env::var(constants::RESTIC_BIN_ENV)
        .unwrap_or_else(|_| constants::DEFAULT_RESTIC_BIN.to_string())
}

/// Run one restic subcommand to completion and hand back its stdout.
pub fn run(args: &[&str]) -> Result<String, AnchorError> {
    let bin = restic_bin();
    log::debug!("running `{} {}`", bin, args.join(" "));

    let output = Command::new(&bin).args(args).output().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            AnchorError::restic_not_found(&bin)
        } else {
            AnchorError::from(err)
        }
    })?;

    let subcommand = args.first().copied().unwrap_or_default();
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if output.status.code() == Some(1) {
            return Err(decode_failure(&stderr));
        }
        let code = match output.status.code() {
            Some(code) => code.to_string(),
            None => String::from("a signal"),
        };
        return Err(AnchorError::restic_unexpected(format!(
            "`{bin} {subcommand}` exited with {code}, stderr: {stderr}"
        )));
    }

    if !output.stderr.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AnchorError::restic_unexpected(format!(
            "`{bin} {subcommand}` exited successfully but wrote to stderr: {stderr}"
        )));
    }

    let stdout = String::from_utf8(output.stdout)?;
    Ok(stdout)
}

/// Exit code 1 comes with a JSON body on stderr carrying the message restic
/// wants the user to see.
fn decode_failure(stderr: &str) -> AnchorError {
    match serde_json::from_str::<ResticErrorBody>(stderr) {
        Ok(body) => AnchorError::restic_failed(body.message),
        Err(err) => AnchorError::malformed_stream(stderr, err),
    }
}
