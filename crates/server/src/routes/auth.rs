use axum::{extract::State, response::Redirect, Form};

use service::auth::domain::{LoginInput, SignupInput};

use crate::errors::ApiError;
use crate::state::AppState;

/// `POST /signup`: hash and store a new account, then send the user to log in.
pub async fn signup(State(state): State<AppState>, Form(input): Form<SignupInput>) -> Result<Redirect, ApiError> {
    state
        .auth
        .signup(input)
        .await
        .map_err(|e| ApiError::auth(e, "Could not save user data."))?;
    Ok(Redirect::to("/login"))
}

/// `POST /login`: 400 with a specific message for unknown user or wrong password.
pub async fn login(State(state): State<AppState>, Form(input): Form<LoginInput>) -> Result<Redirect, ApiError> {
    state
        .auth
        .login(input)
        .await
        .map_err(|e| ApiError::auth(e, "Login failed due to an internal error."))?;
    Ok(Redirect::to("/"))
}
