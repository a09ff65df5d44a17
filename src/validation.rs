use crate::authority::TrustedHostAuthority;
use crate::constants::server;
use crate::error::RequestError;
use crate::snapshot::RequestSnapshot;
use crate::util::{is_header_key, scrub_non_printable};
use tracing::{debug, warn};

/// Replaces bytes outside printable US-ASCII with `?` in every header-derived
/// server variable and every cookie. Returns the keys that were rewritten,
/// headers first, then cookies, each in snapshot order.
pub(crate) fn scrub_charset(snapshot: &mut RequestSnapshot) -> Vec<String> {
    let mut offending = Vec::new();

    for (key, value) in snapshot.server_mut().iter_mut() {
        if !is_header_key(key) {
            continue;
        }
        if let Some(clean) = scrub_non_printable(value) {
            *value = clean;
            offending.push(key.clone());
        }
    }

    for (name, value) in snapshot.cookies_mut().iter_mut() {
        if let Some(clean) = scrub_non_printable(value) {
            *value = clean;
            offending.push(name.clone());
        }
    }

    if !offending.is_empty() {
        debug!("Scrubbed invalid characters from: {}", offending.join(" "));
    }

    offending
}

/// Removes the `X-Forwarded-*` headers unless the peer in `REMOTE_ADDR` is
/// trusted. Returns the removed keys in the order of [`server::FORWARDED`].
pub(crate) fn strip_untrusted_forwarded(
    snapshot: &mut RequestSnapshot,
    authority: &dyn TrustedHostAuthority,
) -> Vec<String> {
    let present: Vec<&str> = server::FORWARDED
        .into_iter()
        .filter(|key| snapshot.server(key).is_some())
        .collect();

    if present.is_empty() {
        return Vec::new();
    }

    let peer = snapshot.server(server::REMOTE_ADDR).unwrap_or_default();
    if authority.is_trusted_host(peer) {
        return Vec::new();
    }

    warn!(
        "Stripping forwarded headers from untrusted peer '{}': {}",
        peer,
        present.join(" ")
    );

    for key in &present {
        snapshot.remove_server(key);
    }

    present.into_iter().map(str::to_owned).collect()
}

/// Runs both validation passes over `snapshot`.
///
/// Both passes always run, so invalid bytes are scrubbed and untrusted
/// forwarded headers are removed even when the other pass fails. When both
/// fail, the error message lists the charset violations first, then the
/// stripped forwarded headers.
pub(crate) fn validate(
    snapshot: &mut RequestSnapshot,
    authority: &dyn TrustedHostAuthority,
) -> Result<(), RequestError> {
    let invalid = scrub_charset(snapshot);
    let untrusted = strip_untrusted_forwarded(snapshot, authority);

    let mut violations = Vec::with_capacity(2);
    if !invalid.is_empty() {
        violations.push(format!("Invalid characters found in: {}", invalid.join(" ")));
    }
    if !untrusted.is_empty() {
        violations.push(format!(
            "Forwarded headers from untrusted host: {}",
            untrusted.join(" ")
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(RequestError::bad_request(violations.join("; ")))
    }
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;
