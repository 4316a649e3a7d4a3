use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{FormData, RequestMode, ResponseType};

use crate::config::SignupConfig;

/// How long a submission result stays on screen.
pub const MESSAGE_DISPLAY_MS: u32 = 5_000;

pub const SIGNUP_CONFIRMATION: &str = "Thanks for signing up! We'll notify you when we launch. 🎉";

/// Whitespace as browsers define it for `\s`, which also covers U+FEFF.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{}]+", BROWSER_WHITESPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

/// Which page a sign-up came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupSource {
    Main,
    Mobile,
}

impl SignupSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupSource::Main => "main",
            SignupSource::Mobile => "mobile",
        }
    }
}

impl fmt::Display for SignupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmailSubmission {
    pub email: String,
    pub source: SignupSource,
    pub timestamp: String,
}

impl EmailSubmission {
    pub fn new(email: &str, source: SignupSource, at: DateTime<Utc>) -> Self {
        Self {
            email: email.to_string(),
            source,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Form fields in the order the endpoint reads them.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("email", self.email.as_str()),
            ("source", self.source.as_str()),
            ("timestamp", self.timestamp.as_str()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Body the spreadsheet endpoint answers with. Only readable outside `no-cors` mode.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EndpointReply {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DispatchOutcome {
    /// The request went out but the response cannot be inspected.
    Opaque,
    Reply(EndpointReply),
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum SignupError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Email service not configured. Please try again later.")]
    NotConfigured,

    #[error("Something went wrong. Please try again later.")]
    Transport(String),

    #[error("{0}")]
    Rejected(String),
}

impl SignupError {
    fn from_js(context: &str, value: JsValue) -> Self {
        SignupError::Transport(format!("{}: {:?}", context, value))
    }

    fn log(&self) {
        match self {
            SignupError::InvalidEmail => log::debug!("Sign-up ignored, malformed email"),
            SignupError::NotConfigured => log::error!("Sign-up endpoint URL not configured"),
            SignupError::Transport(detail) => log::error!("Email submission error: {}", detail),
            SignupError::Rejected(message) => {
                log::warn!("Sign-up endpoint rejected submission: {}", message)
            }
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait SignupTransport {
    async fn dispatch(
        &self,
        endpoint: &str,
        submission: &EmailSubmission,
    ) -> Result<DispatchOutcome, SignupError>;
}

/// Posts sign-ups from the browser as form data.
pub struct BrowserTransport {
    mode: RequestMode,
}

impl BrowserTransport {
    pub fn from_config(config: &SignupConfig) -> Self {
        let mode = if config.read_response {
            RequestMode::Cors
        } else {
            RequestMode::NoCors
        };
        Self { mode }
    }
}

impl SignupTransport for BrowserTransport {
    async fn dispatch(
        &self,
        endpoint: &str,
        submission: &EmailSubmission,
    ) -> Result<DispatchOutcome, SignupError> {
        let form = FormData::new().map_err(|e| SignupError::from_js("FormData", e))?;
        for (name, value) in submission.form_fields() {
            form.append_with_str(name, value)
                .map_err(|e| SignupError::from_js("FormData append", e))?;
        }

        let response = Request::post(endpoint)
            .mode(self.mode)
            .body(form)
            .send()
            .await
            .map_err(|e| SignupError::Transport(e.to_string()))?;

        if response.as_raw().type_() == ResponseType::Opaque {
            return Ok(DispatchOutcome::Opaque);
        }

        let reply = response
            .json::<EndpointReply>()
            .await
            .map_err(|e| SignupError::Transport(format!("unreadable reply: {}", e)))?;
        Ok(DispatchOutcome::Reply(reply))
    }
}

/// Releases the in-flight flag when the submission finishes or is dropped.
struct InFlight {
    flag: Rc<Cell<bool>>,
}

impl InFlight {
    fn acquire(flag: &Rc<Cell<bool>>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag: flag.clone() })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct SignupFlow<T> {
    config: SignupConfig,
    transport: T,
    clock: fn() -> DateTime<Utc>,
    in_flight: Rc<Cell<bool>>,
}

impl SignupFlow<BrowserTransport> {
    pub fn browser(config: SignupConfig) -> Self {
        let transport = BrowserTransport::from_config(&config);
        Self::new(config, transport)
    }
}

impl<T: SignupTransport> SignupFlow<T> {
    pub fn new(config: SignupConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            clock: Utc::now,
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    #[cfg(test)]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Starts a submission, or returns `None` while another one is still outstanding.
    pub fn submit(
        self: Rc<Self>,
        email: &str,
        source: SignupSource,
    ) -> Option<impl Future<Output = SubmissionResult>> {
        let guard = InFlight::acquire(&self.in_flight)?;
        let email = email.to_string();
        Some(async move {
            let _guard = guard;
            match self.attempt(&email, source).await {
                Ok(()) => SubmissionResult::success(SIGNUP_CONFIRMATION),
                Err(err) => {
                    err.log();
                    SubmissionResult::failure(err.to_string())
                }
            }
        })
    }

    async fn attempt(&self, email: &str, source: SignupSource) -> Result<(), SignupError> {
        if !is_valid_email(email) {
            return Err(SignupError::InvalidEmail);
        }
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or(SignupError::NotConfigured)?;

        let submission = EmailSubmission::new(email, source, (self.clock)());
        log::info!("Submitting {} sign-up", submission.source);

        match self.transport.dispatch(endpoint, &submission).await? {
            DispatchOutcome::Opaque => Ok(()),
            DispatchOutcome::Reply(reply) if reply.success => Ok(()),
            DispatchOutcome::Reply(reply) => Err(SignupError::Rejected(reply.message)),
        }
    }
}

/// What the sign-up form shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SignupStatus {
    #[default]
    Idle,
    Submitting,
    Finished(SubmissionResult),
}

impl SignupStatus {
    /// Status once a submission settles, and whether the typed email should be cleared.
    pub fn settle(result: SubmissionResult) -> (Self, bool) {
        let clear_email = result.success;
        (SignupStatus::Finished(result), clear_email)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SignupStatus::Submitting)
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        match self {
            SignupStatus::Finished(result) => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeTransport {
        outcome: Result<DispatchOutcome, SignupError>,
        calls: RefCell<Vec<(String, EmailSubmission)>>,
    }

    impl FakeTransport {
        fn answering(outcome: Result<DispatchOutcome, SignupError>) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SignupTransport for FakeTransport {
        async fn dispatch(
            &self,
            endpoint: &str,
            submission: &EmailSubmission,
        ) -> Result<DispatchOutcome, SignupError> {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), submission.clone()));
            self.outcome.clone()
        }
    }

    struct GatedTransport {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        calls: Cell<usize>,
    }

    impl SignupTransport for GatedTransport {
        async fn dispatch(
            &self,
            _endpoint: &str,
            _submission: &EmailSubmission,
        ) -> Result<DispatchOutcome, SignupError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(DispatchOutcome::Opaque)
        }
    }

    const ENDPOINT: &str = "https://script.google.com/macros/s/test/exec";

    fn fixed_clock() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-14T15:09:26.535Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn flow_with(
        config: SignupConfig,
        outcome: Result<DispatchOutcome, SignupError>,
    ) -> Rc<SignupFlow<FakeTransport>> {
        Rc::new(SignupFlow::new(config, FakeTransport::answering(outcome)).with_clock(fixed_clock))
    }

    fn run(flow: &Rc<SignupFlow<FakeTransport>>, email: &str, source: SignupSource) -> SubmissionResult {
        block_on(flow.clone().submit(email, source).expect("flow is idle"))
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email(" a@b.co"));
        assert!(!is_valid_email("a\u{FEFF}b@c.de"));
        assert!(!is_valid_email("a@b.c\u{FEFF}"));
        assert!(!is_valid_email("a\u{00A0}b@c.de"));
        assert!(!is_valid_email("a@b.c\u{2028}d"));
    }

    #[test]
    fn test_submission_fields() {
        let submission = EmailSubmission::new("cat@purr.io", SignupSource::Mobile, fixed_clock());
        assert_eq!(submission.timestamp, "2025-03-14T15:09:26.535Z");
        assert_eq!(
            submission.form_fields(),
            [
                ("email", "cat@purr.io"),
                ("source", "mobile"),
                ("timestamp", "2025-03-14T15:09:26.535Z"),
            ]
        );
    }

    #[test]
    fn test_unconfigured_endpoint_skips_network() {
        let flow = flow_with(SignupConfig::default(), Ok(DispatchOutcome::Opaque));
        let result = run(&flow, "a@b.co", SignupSource::Main);
        assert!(!result.success);
        assert!(result.message.starts_with("Email service not configured"));
        assert!(flow.transport.calls.borrow().is_empty());
    }

    #[test]
    fn test_invalid_email_skips_network() {
        let flow = flow_with(SignupConfig::with_endpoint(ENDPOINT), Ok(DispatchOutcome::Opaque));
        let result = run(&flow, "not-an-email", SignupSource::Main);
        assert_eq!(
            result,
            SubmissionResult::failure("Please enter a valid email address")
        );
        assert!(flow.transport.calls.borrow().is_empty());
    }

    #[test]
    fn test_invalid_email_reported_before_missing_config() {
        let flow = flow_with(SignupConfig::default(), Ok(DispatchOutcome::Opaque));
        let result = run(&flow, "", SignupSource::Mobile);
        assert_eq!(result.message, "Please enter a valid email address");
    }

    #[test]
    fn test_opaque_dispatch_is_success() {
        let flow = flow_with(SignupConfig::with_endpoint(ENDPOINT), Ok(DispatchOutcome::Opaque));
        let result = run(&flow, "a@b.co", SignupSource::Main);
        assert!(result.success);
        assert_eq!(result.message, SIGNUP_CONFIRMATION);

        let calls = flow.transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, ENDPOINT);
        assert_eq!(calls[0].1.email, "a@b.co");
        assert_eq!(calls[0].1.source, SignupSource::Main);
        assert_eq!(calls[0].1.timestamp, "2025-03-14T15:09:26.535Z");
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let flow = flow_with(
            SignupConfig::with_endpoint(ENDPOINT),
            Err(SignupError::Transport("TypeError: Failed to fetch".into())),
        );
        let result = run(&flow, "a@b.co", SignupSource::Main);
        assert_eq!(
            result,
            SubmissionResult::failure("Something went wrong. Please try again later.")
        );
        assert!(!flow.is_in_flight());
    }

    #[test]
    fn test_readable_reply_surfaces_rejection() {
        let flow = flow_with(
            SignupConfig::with_endpoint(ENDPOINT),
            Ok(DispatchOutcome::Reply(EndpointReply {
                success: false,
                message: "Email already registered".into(),
            })),
        );
        let result = run(&flow, "a@b.co", SignupSource::Mobile);
        assert_eq!(result, SubmissionResult::failure("Email already registered"));
    }

    #[test]
    fn test_readable_reply_success() {
        let flow = flow_with(
            SignupConfig::with_endpoint(ENDPOINT),
            Ok(DispatchOutcome::Reply(EndpointReply {
                success: true,
                message: "Success".into(),
            })),
        );
        let result = run(&flow, "a@b.co", SignupSource::Main);
        assert_eq!(result, SubmissionResult::success(SIGNUP_CONFIRMATION));
    }

    #[test]
    fn test_endpoint_reply_parsing() {
        let reply: EndpointReply =
            serde_json::from_str(r#"{"success":false,"message":"Invalid email"}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.message, "Invalid email");

        let reply: EndpointReply = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(reply.success);
        assert!(reply.message.is_empty());
    }

    #[test]
    fn test_second_submit_ignored_while_in_flight() {
        let (release, gate) = oneshot::channel::<()>();
        let flow = Rc::new(SignupFlow::new(
            SignupConfig::with_endpoint(ENDPOINT),
            GatedTransport {
                gate: RefCell::new(Some(gate)),
                calls: Cell::new(0),
            },
        ));

        let mut first = Box::pin(
            flow.clone()
                .submit("a@b.co", SignupSource::Main)
                .expect("first submit starts"),
        );
        assert!(flow.is_in_flight());
        block_on(async {
            assert!(futures::poll!(first.as_mut()).is_pending());
        });

        assert!(flow.clone().submit("c@d.io", SignupSource::Main).is_none());
        assert_eq!(flow.transport.calls.get(), 1);

        release.send(()).unwrap();
        let result = block_on(first);
        assert!(result.success);
        assert!(!flow.is_in_flight());
        assert!(flow.clone().submit("c@d.io", SignupSource::Main).is_some());
    }

    #[test]
    fn test_dropped_submission_releases_flag() {
        let flow = flow_with(SignupConfig::with_endpoint(ENDPOINT), Ok(DispatchOutcome::Opaque));
        let pending = flow.clone().submit("a@b.co", SignupSource::Main);
        assert!(pending.is_some());
        assert!(flow.is_in_flight());
        drop(pending);
        assert!(!flow.is_in_flight());
        assert!(flow.transport.calls.borrow().is_empty());
    }

    #[test]
    fn test_success_clears_email() {
        let (status, clear_email) =
            SignupStatus::settle(SubmissionResult::success(SIGNUP_CONFIRMATION));
        assert!(clear_email);
        assert!(!status.is_submitting());
        assert_eq!(
            status.result(),
            Some(&SubmissionResult::success(SIGNUP_CONFIRMATION))
        );
    }

    #[test]
    fn test_failure_keeps_email() {
        let flow = flow_with(
            SignupConfig::with_endpoint(ENDPOINT),
            Err(SignupError::Transport("TypeError: Failed to fetch".into())),
        );
        let (status, clear_email) = SignupStatus::settle(run(&flow, "a@b.co", SignupSource::Main));
        assert!(!clear_email);
        assert_eq!(
            status,
            SignupStatus::Finished(SubmissionResult::failure(
                "Something went wrong. Please try again later."
            ))
        );

        let (status, clear_email) =
            SignupStatus::settle(run(&flow, "not-an-email", SignupSource::Main));
        assert!(!clear_email);
        assert_eq!(
            status.result().map(|r| r.message.as_str()),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_message_clears_after_five_seconds() {
        assert_eq!(MESSAGE_DISPLAY_MS, 5_000);
        assert_eq!(SignupStatus::default(), SignupStatus::Idle);
        assert!(SignupStatus::default().result().is_none());
    }

    #[test]
    fn test_forms_sharing_a_flow_are_exclusive() {
        let (release, gate) = oneshot::channel::<()>();
        let flow = Rc::new(SignupFlow::new(
            SignupConfig::with_endpoint(ENDPOINT),
            GatedTransport {
                gate: RefCell::new(Some(gate)),
                calls: Cell::new(0),
            },
        ));
        let hero = Rc::clone(&flow);
        let cta = Rc::clone(&flow);

        let mut pending = Box::pin(
            hero.submit("a@b.co", SignupSource::Mobile)
                .expect("hero form submits"),
        );
        block_on(async {
            assert!(futures::poll!(pending.as_mut()).is_pending());
        });
        assert!(cta.clone().submit("a@b.co", SignupSource::Mobile).is_none());

        release.send(()).unwrap();
        assert!(block_on(pending).success);
        assert_eq!(flow.transport.calls.get(), 1);
        assert!(cta.submit("a@b.co", SignupSource::Mobile).is_some());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SignupError::NotConfigured.to_string(),
            "Email service not configured. Please try again later."
        );
        assert_eq!(
            SignupError::Transport("boom".into()).to_string(),
            "Something went wrong. Please try again later."
        );
        assert_eq!(SignupError::Rejected("Server error".into()).to_string(), "Server error");
    }
}
