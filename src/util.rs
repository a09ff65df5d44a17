use crate::constants::server;

/// Converts an HTTP header name into the `HTTP_<NAME>` key used by the
/// server snapshot, e.g. `X-Forwarded-Host` becomes `HTTP_X_FORWARDED_HOST`.
#[doc(hidden)]
pub fn header_key(name: &str) -> String {
    let name = name.trim();
    let mut key = String::with_capacity(server::HEADER_PREFIX.len() + name.len());
    key.push_str(server::HEADER_PREFIX);
    for byte in name.bytes() {
        key.push(match byte {
            b'-' => '_',
            other => other.to_ascii_uppercase() as char,
        });
    }
    key
}

pub(crate) fn is_header_key(key: &str) -> bool {
    key.starts_with(server::HEADER_PREFIX)
}

pub(crate) fn is_printable_ascii(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

/// Returns the value with every byte outside printable US-ASCII replaced by
/// `?`, or `None` when the value is already clean.
pub(crate) fn scrub_non_printable(value: &str) -> Option<String> {
    if value.bytes().all(is_printable_ascii) {
        return None;
    }

    Some(
        value
            .bytes()
            .map(|byte| {
                if is_printable_ascii(byte) {
                    byte as char
                } else {
                    '?'
                }
            })
            .collect(),
    )
}

pub(crate) fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Parses the leading numeric part of `value` as a float, yielding `0.0` when
/// there is none. `"0.5abc"` parses as `0.5`.
pub(crate) fn lenient_float(value: &str) -> f64 {
    let value = value.trim();
    if let Ok(parsed) = value.parse::<f64>()
        && parsed.is_finite()
    {
        return parsed + 0.0;
    }

    let mut end = 0;
    let mut seen_dot = false;
    for (idx, byte) in value.bytes().enumerate() {
        match byte {
            b'+' | b'-' if idx == 0 => {}
            b'0'..=b'9' => end = idx + 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }

    value[..end].parse::<f64>().map_or(0.0, |parsed| parsed + 0.0)
}

/// Strips a trailing `:port` from a `Host` value. Bracketed IPv6 literals keep
/// their brackets; bare IPv6 addresses are returned unchanged.
pub(crate) fn host_without_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port))
            if is_all_digits(port) && (!name.contains(':') || name.ends_with(']')) =>
        {
            name
        }
        _ => host,
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
