use log::warn;
use validator::Validate;

use crate::domain::session::{DemoCredentials, Session};
use crate::forms::auth::LoginForm;
use crate::services::{ServiceError, ServiceResult};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Email ou senha incorretos.";

/// Validates the login form and checks it against the demo account.
pub fn login(credentials: &DemoCredentials, form: LoginForm) -> ServiceResult<Session> {
    if let Err(err) = form.validate() {
        warn!("Failed to validate login form: {err}");
        return Err(ServiceError::Form(INVALID_CREDENTIALS_MESSAGE.to_string()));
    }

    Session::login(credentials, &form.email, &form.password).map_err(|err| {
        warn!("Rejected login for {}: {err}", form.email);
        ServiceError::Unauthorized
    })
}
