//! Outcome sinks: user-visible notifications and navigation

/// Kind of user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Destination routes the controller can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    Interview,
}

impl Route {
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::SignIn => "/sign-in",
            Route::SignUp => "/sign-up",
            Route::Interview => "/interview",
        }
    }
}

/// Consumes `(kind, message)` pairs; fire-and-forget
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send {
    fn notify(&mut self, kind: NoticeKind, message: &str);
}

/// Consumes destination routes; fire-and-forget
#[cfg_attr(test, mockall::automock)]
pub trait NavigationSink: Send {
    fn navigate(&mut self, route: Route);
}
