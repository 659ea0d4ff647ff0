use axum::http::{header, HeaderMap};

use crate::session::marker::{Role, SessionMarker};

pub const SIGNIN_PATH: &str = "/auth/signin";

/// Outcome of checking a marker against the role a layout needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(SessionMarker),
    Redirect(&'static str),
}

pub fn check(marker: Option<SessionMarker>, required: Role) -> Access {
    match marker {
        None => Access::Redirect(SIGNIN_PATH),
        Some(marker) if marker.role != required => Access::Redirect(marker.role.home()),
        Some(marker) => Access::Granted(marker),
    }
}

/// Read the marker cookie. A value that does not decode counts as no marker.
pub fn read_marker(headers: &HeaderMap, cookie_name: &str) -> Option<SessionMarker> {
    let raw = get_cookie_value(headers, cookie_name)?;
    match SessionMarker::decode(raw) {
        Ok(marker) => Some(marker),
        Err(e) => {
            tracing::warn!("Ignoring unreadable session marker: {}", e);
            None
        }
    }
}

pub fn marker_cookie(cookie_name: &str, encoded: &str) -> String {
    format!(
        "{}={}; HttpOnly; SameSite=Strict; Path=/",
        cookie_name, encoded
    )
}

pub fn clear_marker_cookie(cookie_name: &str) -> String {
    format!(
        "{}=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0",
        cookie_name
    )
}

fn get_cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .map(|s| s.trim())
        .find_map(|cookie| {
            let mut split = cookie.splitn(2, '=');
            let key = split.next()?.trim();
            let val = split.next()?.trim();
            if key == name && !val.is_empty() {
                Some(val)
            } else {
                None
            }
        })
}
