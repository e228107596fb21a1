//! Shared test fixtures: in-memory auth adapters and tracing setup.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use sweepcheck::auth::{AuthError, LocalAuthSource, RemoteAuthSource};
use sweepcheck::domain::{ChangePasswordRequest, Credential, TeacherProfile};

/// Initialize test log output once per process. Safe to call from
/// every test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn teacher(name: &str, start_floor: u32) -> TeacherProfile {
    TeacherProfile {
        name: name.to_string(),
        is_male: true,
        start_floor,
        token: format!("token-{}", name),
    }
}

/// In-memory stand-in for the file-backed auth store.
///
/// Clones share state, so a test can keep a handle while the view
/// model owns another.
#[derive(Clone, Default)]
pub struct MemoryAuthStore {
    profile: Arc<Mutex<Option<TeacherProfile>>>,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: TeacherProfile) -> Self {
        let store = Self::new();
        *store.profile.lock() = Some(profile);
        store
    }
}

impl LocalAuthSource for MemoryAuthStore {
    fn is_token_empty(&self) -> bool {
        match self.profile.lock().as_ref() {
            Some(profile) => profile.token.is_empty(),
            None => true,
        }
    }

    fn clear(&self) {
        *self.profile.lock() = None;
    }

    fn save(&self, profile: &TeacherProfile) -> Result<(), AuthError> {
        *self.profile.lock() = Some(profile.clone());
        Ok(())
    }

    fn fetch(&self) -> Result<TeacherProfile, AuthError> {
        self.profile.lock().clone().ok_or(AuthError::NotFound)
    }
}

#[derive(Default)]
struct ScriptedRemoteInner {
    login_results: Mutex<VecDeque<Result<TeacherProfile, AuthError>>>,
    change_results: Mutex<VecDeque<Result<(), AuthError>>>,
    login_calls: AtomicUsize,
    change_calls: AtomicUsize,
}

/// Scripted stand-in for the HTTP auth client.
///
/// Tests enqueue responses up front; each call consumes one and is
/// counted. An unscripted call answers with a 500 so a test that
/// forgot to script fails loudly instead of hanging.
#[derive(Clone, Default)]
pub struct ScriptedAuthRemote {
    inner: Arc<ScriptedRemoteInner>,
}

impl ScriptedAuthRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_login(&self, result: Result<TeacherProfile, AuthError>) {
        self.inner.login_results.lock().push_back(result);
    }

    pub fn enqueue_change_password(&self, result: Result<(), AuthError>) {
        self.inner.change_results.lock().push_back(result);
    }

    pub fn login_calls(&self) -> usize {
        self.inner.login_calls.load(Ordering::SeqCst)
    }

    pub fn change_password_calls(&self) -> usize {
        self.inner.change_calls.load(Ordering::SeqCst)
    }
}

impl RemoteAuthSource for ScriptedAuthRemote {
    async fn login(&self, _credential: Credential) -> Result<TeacherProfile, AuthError> {
        self.inner.login_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .login_results
            .lock()
            .pop_front()
            .unwrap_or(Err(AuthError::Server { status: 500 }))
    }

    async fn change_password(
        &self,
        _token: &str,
        _request: ChangePasswordRequest,
    ) -> Result<(), AuthError> {
        self.inner.change_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .change_results
            .lock()
            .pop_front()
            .unwrap_or(Err(AuthError::Server { status: 500 }))
    }
}
