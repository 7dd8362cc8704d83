//! Credential form: sign-in and sign-up against the auth backend

use crate::config::ClientConfig;
use crate::schema::{FieldSpec, FormSpec, ValidValues};
use crate::service::{AuthApi, ServiceError};
use crate::submit::{NavigationSink, NotificationSink, Route, SubmissionController, SubmitAction};
use async_trait::async_trait;

/// Mode of the credential form; fixed when the spec is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Field set and rules for the credential form.
///
/// The name field is required (min 3 characters) only in sign-up mode.
pub fn auth_spec(mode: AuthMode) -> FormSpec {
    let mut name = FieldSpec::text("name", "Name");
    if mode == AuthMode::SignUp {
        name = name.required().min_len(3);
    }
    FormSpec::new(vec![
        name,
        FieldSpec::email("email", "Email").required(),
        FieldSpec::password("password", "Password").required().min_len(3),
    ])
}

/// Submission behavior of the credential form
pub struct AuthAction<S> {
    service: S,
    mode: AuthMode,
}

#[async_trait]
impl<S: AuthApi> SubmitAction for AuthAction<S> {
    async fn dispatch(&mut self, values: &ValidValues) -> Result<(), ServiceError> {
        let email = values.text("email").unwrap_or("");
        let password = values.text("password").unwrap_or("");
        match self.mode {
            AuthMode::SignUp => {
                let name = values.text("name").unwrap_or("");
                self.service.sign_up(name, email, password).await
            }
            AuthMode::SignIn => self.service.sign_in(email, password).await,
        }
    }

    fn success_message(&self) -> String {
        match self.mode {
            AuthMode::SignUp => "Account created successfully. Please sign in.".to_string(),
            AuthMode::SignIn => "Signed in successfully.".to_string(),
        }
    }

    fn failure_message(&self, err: &ServiceError) -> String {
        format!("There was an error: {err}")
    }

    fn success_route(&self) -> Route {
        match self.mode {
            AuthMode::SignUp => Route::SignIn,
            AuthMode::SignIn => Route::Home,
        }
    }

    fn failure_route(&self) -> Option<Route> {
        // A failed credential attempt keeps the user on the form.
        None
    }
}

/// Build a credential form controller for the given mode
pub fn auth_controller<S: AuthApi>(
    mode: AuthMode,
    config: &ClientConfig,
    service: S,
    notifier: Box<dyn NotificationSink>,
    nav: Box<dyn NavigationSink>,
) -> SubmissionController<AuthAction<S>> {
    let mut spec = auth_spec(mode);
    if config.validate_on_change.unwrap_or(false) {
        spec = spec.with_validate_on_change();
    }
    SubmissionController::new(spec, AuthAction { service, mode }, notifier, nav)
}
