use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::FutureExt;
use futures::executor::block_on;

use super::*;
use crate::error::LoginError;
use crate::net::types::LoginResponse;
use crate::state::login::{LoginForm, LoginPhase};
use crate::state::session::MemorySessionStore;
use crate::state::toast::ToastKind;

// =============================================================
// Test doubles
// =============================================================

#[derive(Clone)]
struct ScriptedApi {
    result: Result<LoginResponse, LoginError>,
    calls: Rc<RefCell<Vec<Credentials>>>,
}

impl ScriptedApi {
    fn accepting() -> Self {
        Self::with(Ok(LoginResponse {
            token: "tok-1".to_owned(),
            user: serde_json::json!({ "id": 1, "email": "root@example.com" }),
        }))
    }

    fn with(result: Result<LoginResponse, LoginError>) -> Self {
        Self { result, calls: Rc::default() }
    }
}

#[async_trait(?Send)]
impl AuthApi for ScriptedApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, LoginError> {
        self.calls.borrow_mut().push(credentials.clone());
        self.result.clone()
    }
}

struct PendingApi;

#[async_trait(?Send)]
impl AuthApi for PendingApi {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, LoginError> {
        futures::future::pending::<Result<LoginResponse, LoginError>>().await
    }
}

#[derive(Clone, Default)]
struct RecordingNavigator(Rc<RefCell<Vec<String>>>);

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_owned());
    }
}

impl RecordingNavigator {
    fn paths(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier(Rc<RefCell<Vec<(ToastKind, String)>>>);

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, text: &str) {
        self.0.borrow_mut().push((kind, text.to_owned()));
    }
}

impl RecordingNotifier {
    fn seen(&self) -> Vec<(ToastKind, String)> {
        self.0.borrow().clone()
    }
}

fn context<A>(api: A) -> LoginContext<A, MemorySessionStore, RecordingNavigator, RecordingNotifier> {
    let config = LoginConfig::default();
    LoginContext {
        api,
        store: MemorySessionStore::new(&config),
        navigator: RecordingNavigator::default(),
        notifier: RecordingNotifier::default(),
        config,
    }
}

fn filled_form() -> LoginForm {
    let mut form = LoginForm::default();
    form.set_email("root@example.com".to_owned());
    form.set_password("hunter2".to_owned());
    form
}

// =============================================================
// Mount guard
// =============================================================

#[test]
fn existing_token_redirects_to_admin() {
    let config = LoginConfig::default();
    let store = MemorySessionStore::with_token(&config, "tok-existing");
    let nav = RecordingNavigator::default();

    assert!(redirect_if_authenticated(&store, &nav, &config));
    assert_eq!(nav.paths(), vec!["/admin".to_owned()]);
}

#[test]
fn empty_storage_keeps_form() {
    let config = LoginConfig::default();
    let store = MemorySessionStore::new(&config);
    let nav = RecordingNavigator::default();

    assert!(!redirect_if_authenticated(&store, &nav, &config));
    assert!(nav.paths().is_empty());
    assert_eq!(LoginForm::default().phase(), LoginPhase::Idle);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn accepted_login_stores_session_and_navigates() {
    let ctx = context(ScriptedApi::accepting());
    let mut form = filled_form();

    let creds = form.begin_submit().unwrap();
    let outcome = block_on(submit(&ctx, creds));
    form.settle(outcome);

    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert_eq!(ctx.store.get("admin-token").as_deref(), Some("tok-1"));
    let user: serde_json::Value = serde_json::from_str(&ctx.store.get("admin-user").unwrap()).unwrap();
    assert_eq!(user["email"], "root@example.com");
    assert_eq!(ctx.navigator.paths(), vec!["/admin".to_owned()]);
    assert_eq!(ctx.notifier.seen(), vec![(ToastKind::Success, "Signed in".to_owned())]);
    assert!(!form.loading);
    assert!(!form.submit_disabled());
    assert_eq!(form.phase(), LoginPhase::Navigating);
}

#[test]
fn submit_posts_form_credentials() {
    let api = ScriptedApi::accepting();
    let ctx = context(api.clone());
    let mut form = filled_form();

    block_on(submit(&ctx, form.begin_submit().unwrap()));

    let calls = api.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].email, "root@example.com");
    assert_eq!(calls[0].password, "hunter2");
}

#[test]
fn rejected_login_shows_server_message_and_stays() {
    let ctx = context(ScriptedApi::with(Err(LoginError::Rejected {
        status: 401,
        message: Some("bad creds".to_owned()),
    })));
    let mut form = filled_form();

    let creds = form.begin_submit().unwrap();
    let outcome = block_on(submit(&ctx, creds));
    form.settle(outcome);

    assert_eq!(outcome, LoginOutcome::Rejected);
    assert_eq!(ctx.notifier.seen(), vec![(ToastKind::Error, "bad creds".to_owned())]);
    assert!(ctx.navigator.paths().is_empty());
    assert!(ctx.store.is_empty());
    assert!(!form.loading);
    assert_eq!(form.phase(), LoginPhase::Idle);
    assert_eq!(form.email, "root@example.com");
}

#[test]
fn rejection_without_message_uses_generic_text() {
    let ctx = context(ScriptedApi::with(Err(LoginError::Rejected { status: 500, message: None })));
    block_on(submit(&ctx, filled_form().begin_submit().unwrap()));
    assert_eq!(ctx.notifier.seen(), vec![(ToastKind::Error, "Invalid credentials".to_owned())]);
}

#[test]
fn network_failure_uses_generic_text() {
    let ctx = context(ScriptedApi::with(Err(LoginError::Network("connection refused".to_owned()))));
    let outcome = block_on(submit(&ctx, filled_form().begin_submit().unwrap()));
    assert_eq!(outcome, LoginOutcome::Rejected);
    assert_eq!(ctx.notifier.seen(), vec![(ToastKind::Error, "Invalid credentials".to_owned())]);
    assert!(ctx.navigator.paths().is_empty());
}

#[test]
fn unresolved_request_keeps_submit_disabled() {
    let ctx = context(PendingApi);
    let mut form = filled_form();

    let creds = form.begin_submit().unwrap();
    assert!(submit(&ctx, creds).now_or_never().is_none());

    assert!(form.loading);
    assert!(form.submit_disabled());
    assert_eq!(form.phase(), LoginPhase::Submitting);
    assert!(form.begin_submit().is_none());
    assert!(ctx.navigator.paths().is_empty());
    assert!(ctx.notifier.seen().is_empty());
}

#[test]
fn retry_after_rejection_is_manual_and_allowed() {
    let ctx = context(ScriptedApi::with(Err(LoginError::Rejected { status: 401, message: None })));
    let mut form = filled_form();

    let outcome = block_on(submit(&ctx, form.begin_submit().unwrap()));
    form.settle(outcome);
    let outcome = block_on(submit(&ctx, form.begin_submit().unwrap()));
    form.settle(outcome);

    assert_eq!(ctx.api.calls.borrow().len(), 2);
    assert_eq!(ctx.notifier.seen().len(), 2);
}

struct FailingStore;

impl SessionStore for FailingStore {
    fn read_token(&self) -> Option<String> {
        None
    }

    fn write_session(&self, _session: &Session) -> Result<(), LoginError> {
        Err(LoginError::Storage("quota exceeded".to_owned()))
    }
}

#[test]
fn session_write_failure_does_not_navigate() {
    let ctx = LoginContext {
        api: ScriptedApi::accepting(),
        store: FailingStore,
        navigator: RecordingNavigator::default(),
        notifier: RecordingNotifier::default(),
        config: LoginConfig::default(),
    };

    let outcome = block_on(submit(&ctx, filled_form().begin_submit().unwrap()));

    assert_eq!(outcome, LoginOutcome::Rejected);
    assert!(ctx.navigator.paths().is_empty());
    assert_eq!(ctx.notifier.seen(), vec![(ToastKind::Error, "Invalid credentials".to_owned())]);
}
