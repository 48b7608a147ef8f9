//! System URL opener
//!
//! Hands https and mailto links to the platform's default handler. The
//! spawned process is detached; the page never waits on it.

use folio_application::{NavigateError, NavigatorPort};
use std::process::{Command, Stdio};
use tracing::debug;

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

pub struct SystemOpener;

impl NavigatorPort for SystemOpener {
    fn open(&self, url: &str) -> Result<(), NavigateError> {
        if which::which(OPENER).is_err() {
            return Err(NavigateError::NoHandler(url.to_string()));
        }
        debug!(url, "opening link with {}", OPENER);
        Command::new(OPENER)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| NavigateError::Spawn {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}
