//! Cookie builders for the session token.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the session token.
pub const SESSION_COOKIE: &str = "token";

/// Session JWT lifetime and cookie Max-Age in seconds (7 days).
pub const SESSION_TOKEN_EXP: u64 = 604800;

/// Set the session cookie on the jar.
///
/// `secure` is off for plain-http local development only.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use reelbite_auth_types::cookie::{set_session_cookie, SESSION_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), "token_value".to_string(), true);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "token_value");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, value: String, secure: bool) -> CookieJar {
    jar.add(session_cookie(value, Duration::seconds(SESSION_TOKEN_EXP as i64), secure))
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use reelbite_auth_types::cookie::{clear_session_cookie, set_session_cookie, SESSION_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), "t".to_string(), false);
/// let jar = clear_session_cookie(jar, false);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(session_cookie(String::new(), Duration::ZERO, secure))
}

fn session_cookie(value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    // Cross-site in production (frontend and API on different hosts) needs SameSite=None,
    // which browsers only accept together with Secure.
    let same_site = if secure { SameSite::None } else { SameSite::Lax };
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .max_age(max_age)
        .http_only(true)
        .secure(secure)
        .same_site(same_site)
        .build()
}
