/// Address of the frontend service when `SHOPFRONT_FRONTEND_URL` is unset.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:9098";

#[derive(Clone)]
pub struct AppConfig {
    pub frontend_url: String,
    pub log_level: String,
    pub user_agent: String,
    /// `None` leaves requests without a deadline.
    pub request_timeout_secs: Option<u64>,
    /// Cookie (`name=value`) placed in the client's jar before the first call.
    pub session_cookie: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("frontend_url", &self.frontend_url)
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
