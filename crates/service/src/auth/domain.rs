use serde::Deserialize;

/// Signup form input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login form input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Both fields present and non-empty, or `None`.
pub(crate) fn credentials<'a>(username: &'a Option<String>, password: &'a Option<String>) -> Option<(&'a str, &'a str)> {
    match (username.as_deref(), password.as_deref()) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Some((u, p)),
        _ => None,
    }
}
