use crate::catalog::VendorCategory;
use crate::models::{AuthUser, Profile, SignUpMetadata};
use log::{info, warn};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;
use uuid::Uuid;

pub const VENDOR_ROLE: &str = "vendor";
pub const MIN_PASSWORD_LEN: usize = 6;

/// How long the sign in confirmation stays on screen before we leave the page.

pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub const NOT_A_VENDOR: &str = "This account is not registered as a vendor";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
pub const SIGNED_IN: &str = "Signed in successfully! Redirecting to your dashboard...";
pub const SIGNED_UP: &str = "Account created! Please check your email to verify your account.";

/// A loose `local@domain.tld` check, matching what a browser email input
/// accepts closely enough for our purposes.

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
        .is_match(email)
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> AuthMode {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AuthMode::SignIn => write!(f, "sign-in"),
            AuthMode::SignUp => write!(f, "sign-up"),
        }
    }
}

/// The inputs of the vendor sign in / sign up form.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Password,
    BusinessName,
    Category,
    Phone,
    Location,
}

impl Field {

    /// The input id used by the form.

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::BusinessName => "business_name",
            Field::Category => "category",
            Field::Phone => "phone",
            Field::Location => "location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::BusinessName => "Business name",
            Field::Category => "Business category",
            Field::Phone => "Phone number",
            Field::Location => "Location",
        }
    }
}

const SIGN_IN_FIELDS: &[Field] = &[Field::Email, Field::Password];
const SIGN_UP_FIELDS: &[Field] = &[
    Field::Name,
    Field::Email,
    Field::Password,
    Field::BusinessName,
    Field::Category,
    Field::Phone,
    Field::Location,
];

/// The fields that must be filled in before the form can be submitted.

pub fn required_fields(mode: AuthMode) -> &'static [Field] {
    match mode {
        AuthMode::SignIn => SIGN_IN_FIELDS,
        AuthMode::SignUp => SIGN_UP_FIELDS,
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ValidationError {
    Missing(Field),
    InvalidEmail,
    PasswordTooShort,
    UnknownCategory(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::Missing(field) => write!(f, "{} is required", field.label()),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
            ValidationError::PasswordTooShort => {
                write!(f, "Password must be at least {} characters", MIN_PASSWORD_LEN)
            }
            ValidationError::UnknownCategory(category) => {
                write!(f, "\"{}\" is not a business category", category)
            }
        }
    }
}

/// Form values held for one authentication attempt. Updates produce a new
/// form; mode switches never clear anything.

#[derive(Clone, Default, PartialEq)]
pub struct VendorCredentialForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub business_name: String,
    pub category: String,
    pub phone: String,
    pub location: String,
}

impl fmt::Debug for VendorCredentialForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("VendorCredentialForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("business_name", &self.business_name)
            .field("category", &self.category)
            .field("phone", &self.phone)
            .field("location", &self.location)
            .finish()
    }
}

impl VendorCredentialForm {
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.slot(field) = value.into();
        self
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::BusinessName => &self.business_name,
            Field::Category => &self.category,
            Field::Phone => &self.phone,
            Field::Location => &self.location,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::BusinessName => &mut self.business_name,
            Field::Category => &mut self.category,
            Field::Phone => &mut self.phone,
            Field::Location => &mut self.location,
        }
    }

    pub fn validate(&self, mode: AuthMode) -> Result<(), ValidationError> {
        if let Some(field) = required_fields(mode)
            .iter()
            .find(|field| self.get(**field).trim().is_empty())
        {
            return Err(ValidationError::Missing(*field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if mode == AuthMode::SignUp && self.category.parse::<VendorCategory>().is_err() {
            return Err(ValidationError::UnknownCategory(self.category.clone()));
        }
        Ok(())
    }

    /// The account metadata sent along with a vendor sign up.

    pub fn metadata(&self) -> SignUpMetadata {
        SignUpMetadata {
            name: self.name.trim().to_owned(),
            role: VENDOR_ROLE.to_owned(),
            business_name: self.business_name.trim().to_owned(),
            category: self.category.clone(),
            phone: self.phone.trim().to_owned(),
            location: self.location.trim().to_owned(),
        }
    }
}

/// An error returned by the remote auth provider.

#[derive(Clone, PartialEq, Debug)]
pub enum ProviderError {

    /// The provider refused the request and told us why (bad credentials,
    /// duplicate account and so on). The text is shown to the user as is.

    Rejected(String),

    /// Anything else: transport failures, unreadable responses. May or may
    /// not carry readable text.

    Unexpected(Option<String>),
}

impl ProviderError {
    pub fn message(&self) -> String {
        match self {
            ProviderError::Rejected(message) => message.clone(),
            ProviderError::Unexpected(Some(message)) if !message.trim().is_empty() => message.clone(),
            ProviderError::Unexpected(_) => UNEXPECTED_ERROR.to_owned(),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// The remote authentication provider. Implemented over HTTP by the frontend
/// and by scripted fakes in tests.

#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser, ProviderError>;

    async fn sign_up(&self, email: &str, password: &str, metadata: &SignUpMetadata) -> Result<AuthUser, ProviderError>;

    /// Fetch the user's profile, creating it if it doesn't exist yet. Safe to
    /// call repeatedly.

    async fn ensure_user_profile(&self, user: &AuthUser) -> Result<Option<Profile>, ProviderError>;
}

/// A full-page navigation to perform once `delay` has passed.

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Redirect {
    pub target: String,
    pub delay: Duration,
}

/// A scheduled redirect that hasn't fired yet.

pub trait ScheduledTask {
    fn cancel(self);
}

pub trait RedirectScheduler {
    type Task: ScheduledTask;

    fn schedule(&mut self, redirect: Redirect) -> Self::Task;
}

#[derive(Clone, PartialEq, Debug)]
pub enum AuthOutcome {
    Pending,
    Success {
        message: String,
        redirect: Option<Redirect>,
    },
    Failure(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubmitError {

    /// A submission from this form is already in flight.

    Busy,

    Invalid(ValidationError),
}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubmitError::Busy => write!(f, "Please wait for the current request to finish"),
            SubmitError::Invalid(err) => write!(f, "{}", err),
        }
    }
}

/// One submission: a snapshot of the form taken when it was sent.

#[derive(Clone, Debug)]
pub struct Attempt {
    pub id: Uuid,
    pub mode: AuthMode,
    pub form: VendorCredentialForm,
}

/// The result of running an attempt against the provider.

#[derive(Clone, PartialEq, Debug)]
pub struct Completion {
    pub attempt: Uuid,
    pub outcome: AuthOutcome,
}

/// Vendor sign in / sign up state. Holds the form, the displayed outcome and
/// the attempt whose result we are waiting for.

#[derive(Clone, Default, PartialEq, Debug)]
pub struct VendorAuthFlow {
    mode: AuthMode,
    form: VendorCredentialForm,
    outcome: Option<AuthOutcome>,
    attempt: Option<Uuid>,
    redirect: Option<Redirect>,
}

impl VendorAuthFlow {
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn form(&self) -> &VendorCredentialForm {
        &self.form
    }

    pub fn outcome(&self) -> Option<&AuthOutcome> {
        self.outcome.as_ref()
    }

    pub fn state(&self) -> AuthState {
        match self.outcome {
            None => AuthState::Idle,
            Some(AuthOutcome::Pending) => AuthState::Submitting,
            Some(AuthOutcome::Success { .. }) => AuthState::Succeeded,
            Some(AuthOutcome::Failure(_)) => AuthState::Failed,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == AuthState::Submitting
    }

    /// Update one field. Ignored while a submission is in flight; otherwise
    /// returns the flow to idle.

    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.form = std::mem::take(&mut self.form).with(field, value);
        self.outcome = None;
        true
    }

    pub fn toggle_mode(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.mode = self.mode.toggled();
        self.outcome = None;
        true
    }

    /// Start a submission. Validation failures never reach the provider. On
    /// success the previous outcome is cleared straight away and a new attempt
    /// id becomes the only one whose result will be accepted.

    pub fn begin(&mut self) -> Result<Attempt, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }
        self.form.validate(self.mode)?;

        let id = Uuid::new_v4();
        info!("auth attempt {} started ({})", id, self.mode);
        self.attempt = Some(id);
        self.outcome = Some(AuthOutcome::Pending);
        self.redirect = None;

        Ok(Attempt {
            id,
            mode: self.mode,
            form: self.form.clone(),
        })
    }

    /// Apply a finished attempt. Results for anything other than the current
    /// in-flight attempt are dropped.

    pub fn finish(&mut self, completion: Completion) -> bool {
        if self.attempt != Some(completion.attempt) || !self.is_submitting() {
            warn!("dropping stale result for auth attempt {}", completion.attempt);
            return false;
        }
        self.redirect = match &completion.outcome {
            AuthOutcome::Success { redirect, .. } => {
                info!("auth attempt {} succeeded", completion.attempt);
                redirect.clone()
            }
            AuthOutcome::Failure(message) => {
                info!("auth attempt {} failed: {}", completion.attempt, message);
                None
            }
            AuthOutcome::Pending => {
                warn!("auth attempt {} completed without a result", completion.attempt);
                return false;
            }
        };
        self.outcome = Some(completion.outcome);
        true
    }

    pub fn pending_redirect(&self) -> Option<&Redirect> {
        self.redirect.as_ref()
    }

    /// Hand the pending redirect to the caller. Returns it at most once.

    pub fn take_redirect(&mut self) -> Option<Redirect> {
        self.redirect.take()
    }
}

/// Move the flow's pending redirect, if any, into the scheduler.

pub fn schedule_redirect<S: RedirectScheduler>(flow: &mut VendorAuthFlow, scheduler: &mut S) -> Option<S::Task> {
    let redirect = flow.take_redirect()?;
    info!("redirect to {} scheduled in {:?}", redirect.target, redirect.delay);
    Some(scheduler.schedule(redirect))
}

/// Run an attempt against the provider. Never fails: every error becomes a
/// `Failure` outcome.

pub async fn run<P: AuthProvider>(provider: &P, attempt: Attempt, dashboard_path: &str) -> Completion {
    let result = match attempt.mode {
        AuthMode::SignIn => sign_in(provider, &attempt.form, dashboard_path).await,
        AuthMode::SignUp => sign_up(provider, &attempt.form).await,
    };
    Completion {
        attempt: attempt.id,
        outcome: result.unwrap_or_else(|err| AuthOutcome::Failure(err.message())),
    }
}

async fn sign_in<P: AuthProvider>(
    provider: &P,
    form: &VendorCredentialForm,
    dashboard_path: &str,
) -> Result<AuthOutcome, ProviderError> {
    let user = provider
        .sign_in_with_password(form.email.trim(), &form.password)
        .await?;
    let profile = provider.ensure_user_profile(&user).await?;

    match profile {
        Some(profile) if profile.role == VENDOR_ROLE => Ok(AuthOutcome::Success {
            message: SIGNED_IN.to_owned(),
            redirect: Some(Redirect {
                target: dashboard_path.to_owned(),
                delay: REDIRECT_DELAY,
            }),
        }),
        _ => Ok(AuthOutcome::Failure(NOT_A_VENDOR.to_owned())),
    }
}

async fn sign_up<P: AuthProvider>(provider: &P, form: &VendorCredentialForm) -> Result<AuthOutcome, ProviderError> {
    provider
        .sign_up(form.email.trim(), &form.password, &form.metadata())
        .await?;
    Ok(AuthOutcome::Success {
        message: SIGNED_UP.to_owned(),
        redirect: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_DASHBOARD_PATH;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct ScriptedProvider {
        sign_in: Result<AuthUser, ProviderError>,
        sign_up: Result<AuthUser, ProviderError>,
        profile: Result<Option<Profile>, ProviderError>,
        calls: RefCell<Vec<String>>,
        metadata: RefCell<Option<SignUpMetadata>>,
    }

    impl ScriptedProvider {
        fn with_role(role: &str) -> Self {
            ScriptedProvider {
                sign_in: Ok(user()),
                sign_up: Ok(user()),
                profile: Ok(Some(Profile {
                    id: "u1".into(),
                    email: Some("studio@example.com".into()),
                    full_name: None,
                    role: role.into(),
                })),
                calls: RefCell::new(Vec::new()),
                metadata: RefCell::new(None),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl AuthProvider for ScriptedProvider {
        async fn sign_in_with_password(&self, email: &str, _password: &str) -> Result<AuthUser, ProviderError> {
            self.calls.borrow_mut().push(format!("sign_in:{email}"));
            self.sign_in.clone()
        }

        async fn sign_up(&self, email: &str, _password: &str, metadata: &SignUpMetadata) -> Result<AuthUser, ProviderError> {
            self.calls.borrow_mut().push(format!("sign_up:{email}"));
            *self.metadata.borrow_mut() = Some(metadata.clone());
            self.sign_up.clone()
        }

        async fn ensure_user_profile(&self, user: &AuthUser) -> Result<Option<Profile>, ProviderError> {
            self.calls.borrow_mut().push(format!("profile:{}", user.id));
            self.profile.clone()
        }
    }

    #[derive(Default)]
    struct ClockState {
        now: Duration,
        next_id: usize,
        pending: Vec<(usize, Duration, String)>,
        navigations: Vec<String>,
    }

    #[derive(Default)]
    struct FakeClock {
        state: Rc<RefCell<ClockState>>,
    }

    struct FakeTask {
        id: usize,
        state: Rc<RefCell<ClockState>>,
    }

    impl ScheduledTask for FakeTask {
        fn cancel(self) {
            self.state.borrow_mut().pending.retain(|(id, _, _)| *id != self.id);
        }
    }

    impl RedirectScheduler for FakeClock {
        type Task = FakeTask;

        fn schedule(&mut self, redirect: Redirect) -> FakeTask {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + redirect.delay;
            state.pending.push((id, due, redirect.target));
            FakeTask { id, state: Rc::clone(&self.state) }
        }
    }

    impl FakeClock {
        fn advance(&self, by: Duration) {
            let mut state = self.state.borrow_mut();
            state.now += by;
            let now = state.now;
            let (due, waiting): (Vec<_>, Vec<_>) = state.pending.drain(..).partition(|(_, at, _)| *at <= now);
            state.pending = waiting;
            state.navigations.extend(due.into_iter().map(|(_, _, target)| target));
        }

        fn navigations(&self) -> Vec<String> {
            self.state.borrow().navigations.clone()
        }
    }

    fn user() -> AuthUser {
        AuthUser {
            id: "u1".into(),
            email: "studio@example.com".into(),
            role: Some("vendor".into()),
            access_token: Some("token".into()),
        }
    }

    fn sign_in_flow() -> VendorAuthFlow {
        let mut flow = VendorAuthFlow::default();
        flow.edit(Field::Email, "studio@example.com");
        flow.edit(Field::Password, "hunter22");
        flow
    }

    fn sign_up_flow() -> VendorAuthFlow {
        let mut flow = sign_in_flow();
        flow.toggle_mode();
        flow.edit(Field::Name, "Ada Lovelace");
        flow.edit(Field::BusinessName, "Analytical Blooms");
        flow.edit(Field::Category, "florist");
        flow.edit(Field::Phone, "555-0100");
        flow.edit(Field::Location, "London");
        flow
    }

    fn submit(flow: &mut VendorAuthFlow, provider: &ScriptedProvider) -> bool {
        let attempt = flow.begin().unwrap();
        let completion = block_on(run(provider, attempt, DEFAULT_DASHBOARD_PATH));
        flow.finish(completion)
    }

    #[test]
    fn vendor_sign_in_redirects_once_after_delay() {
        let provider = ScriptedProvider::with_role("vendor");
        let mut flow = sign_in_flow();
        let mut clock = FakeClock::default();

        assert!(submit(&mut flow, &provider));
        assert_eq!(flow.state(), AuthState::Succeeded);
        assert_eq!(provider.calls(), vec!["sign_in:studio@example.com", "profile:u1"]);

        assert_eq!(flow.pending_redirect().map(|r| r.delay), Some(REDIRECT_DELAY));
        let _task = schedule_redirect(&mut flow, &mut clock).unwrap();
        assert!(schedule_redirect(&mut flow, &mut clock).is_none());
        assert_eq!(flow.pending_redirect(), None);

        clock.advance(Duration::from_millis(1999));
        assert!(clock.navigations().is_empty());
        clock.advance(Duration::from_millis(1));
        assert_eq!(clock.navigations(), vec![DEFAULT_DASHBOARD_PATH]);
        clock.advance(Duration::from_secs(10));
        assert_eq!(clock.navigations().len(), 1);
    }

    #[test]
    fn non_vendor_sign_in_fails_without_redirect() {
        let provider = ScriptedProvider::with_role("couple");
        let mut flow = sign_in_flow();

        assert!(submit(&mut flow, &provider));
        assert_eq!(flow.outcome(), Some(&AuthOutcome::Failure(NOT_A_VENDOR.into())));
        assert_eq!(flow.take_redirect(), None);
    }

    #[test]
    fn missing_profile_is_not_a_vendor() {
        let mut provider = ScriptedProvider::with_role("vendor");
        provider.profile = Ok(None);
        let mut flow = sign_in_flow();

        submit(&mut flow, &provider);
        assert_eq!(flow.outcome(), Some(&AuthOutcome::Failure(NOT_A_VENDOR.into())));
    }

    #[test]
    fn provider_error_text_is_shown_verbatim() {
        let mut provider = ScriptedProvider::with_role("vendor");
        provider.sign_in = Err(ProviderError::Rejected("Invalid login credentials".into()));
        let mut flow = sign_in_flow();

        submit(&mut flow, &provider);
        assert_eq!(flow.state(), AuthState::Failed);
        assert_eq!(flow.outcome(), Some(&AuthOutcome::Failure("Invalid login credentials".into())));
        assert_eq!(provider.calls(), vec!["sign_in:studio@example.com"]);
    }

    #[test]
    fn unexpected_errors_without_text_get_a_generic_message() {
        let mut provider = ScriptedProvider::with_role("vendor");
        provider.profile = Err(ProviderError::Unexpected(None));
        let mut flow = sign_in_flow();
        submit(&mut flow, &provider);
        assert_eq!(flow.outcome(), Some(&AuthOutcome::Failure(UNEXPECTED_ERROR.into())));

        assert_eq!(ProviderError::Unexpected(Some("  ".into())).message(), UNEXPECTED_ERROR);
        assert_eq!(ProviderError::Unexpected(Some("offline".into())).message(), "offline");
    }

    #[test]
    fn sign_up_sends_vendor_metadata_and_asks_for_verification() {
        let provider = ScriptedProvider::with_role("vendor");
        let mut flow = sign_up_flow();

        assert!(submit(&mut flow, &provider));
        assert_eq!(
            flow.outcome(),
            Some(&AuthOutcome::Success { message: SIGNED_UP.into(), redirect: None })
        );
        assert_eq!(flow.take_redirect(), None);
        assert_eq!(provider.calls(), vec!["sign_up:studio@example.com"]);

        let metadata = provider.metadata.borrow().clone().unwrap();
        assert_eq!(metadata.role, "vendor");
        assert_eq!(metadata.business_name, "Analytical Blooms");
        assert_eq!(metadata.category, "florist");
    }

    #[test]
    fn sign_up_error_is_surfaced() {
        let mut provider = ScriptedProvider::with_role("vendor");
        provider.sign_up = Err(ProviderError::Rejected("User already registered".into()));
        let mut flow = sign_up_flow();

        submit(&mut flow, &provider);
        assert_eq!(flow.outcome(), Some(&AuthOutcome::Failure("User already registered".into())));
    }

    #[test]
    fn incomplete_sign_up_never_reaches_the_provider() {
        for field in [Field::Name, Field::BusinessName, Field::Category, Field::Phone, Field::Location] {
            let mut flow = sign_up_flow();
            flow.edit(field, "");
            assert_eq!(flow.begin().unwrap_err(), SubmitError::Invalid(ValidationError::Missing(field)));
            assert_eq!(flow.state(), AuthState::Idle);
        }
    }

    #[test]
    fn sign_in_only_needs_email_and_password() {
        let flow = sign_in_flow();
        assert_eq!(flow.form().validate(AuthMode::SignIn), Ok(()));
        assert_eq!(
            flow.form().validate(AuthMode::SignUp),
            Err(ValidationError::Missing(Field::Name))
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        let form = VendorCredentialForm::default()
            .with(Field::Email, "not-an-email")
            .with(Field::Password, "hunter22");
        assert_eq!(form.validate(AuthMode::SignIn), Err(ValidationError::InvalidEmail));

        let form = form.with(Field::Email, "a@b.co").with(Field::Password, "short");
        assert_eq!(form.validate(AuthMode::SignIn), Err(ValidationError::PasswordTooShort));

        let mut flow = sign_up_flow();
        flow.edit(Field::Category, "juggler");
        assert_eq!(
            flow.begin().unwrap_err(),
            SubmitError::Invalid(ValidationError::UnknownCategory("juggler".into()))
        );
    }

    #[test]
    fn switching_modes_keeps_values() {
        let mut flow = sign_up_flow();
        flow.toggle_mode();
        assert_eq!(flow.mode(), AuthMode::SignIn);
        assert_eq!(flow.form().business_name, "Analytical Blooms");
        flow.toggle_mode();
        assert_eq!(flow.form().validate(AuthMode::SignUp), Ok(()));
    }

    #[test]
    fn begin_clears_previous_outcome_and_blocks_edits() {
        let mut provider = ScriptedProvider::with_role("vendor");
        provider.sign_in = Err(ProviderError::Rejected("nope".into()));
        let mut flow = sign_in_flow();
        submit(&mut flow, &provider);
        assert_eq!(flow.state(), AuthState::Failed);

        let _attempt = flow.begin().unwrap();
        assert_eq!(flow.outcome(), Some(&AuthOutcome::Pending));
        assert!(!flow.edit(Field::Email, "other@example.com"));
        assert!(!flow.toggle_mode());
        assert_eq!(flow.begin().unwrap_err(), SubmitError::Busy);
        assert_eq!(flow.form().email, "studio@example.com");
    }

    #[test]
    fn editing_after_a_result_returns_to_idle() {
        let provider = ScriptedProvider::with_role("couple");
        let mut flow = sign_in_flow();
        submit(&mut flow, &provider);
        assert_eq!(flow.state(), AuthState::Failed);

        assert!(flow.edit(Field::Password, "another-password"));
        assert_eq!(flow.state(), AuthState::Idle);
        assert_eq!(flow.outcome(), None);
    }

    #[test]
    fn late_results_do_not_overwrite_newer_attempts() {
        let mut flow = sign_in_flow();

        let first = flow.begin().unwrap();
        let first_done = Completion {
            attempt: first.id,
            outcome: AuthOutcome::Failure("first".into()),
        };
        assert!(flow.finish(first_done.clone()));

        let second = flow.begin().unwrap();
        assert!(!flow.finish(first_done));
        assert_eq!(flow.state(), AuthState::Submitting);

        assert!(flow.finish(Completion {
            attempt: second.id,
            outcome: AuthOutcome::Failure("second".into()),
        }));
        assert!(!flow.finish(Completion {
            attempt: first.id,
            outcome: AuthOutcome::Success { message: "late".into(), redirect: None },
        }));
        assert_eq!(flow.outcome(), Some(&AuthOutcome::Failure("second".into())));
    }

    #[test]
    fn repeated_sign_in_is_idempotent() {
        let provider = ScriptedProvider::with_role("vendor");
        let mut flow = sign_in_flow();
        submit(&mut flow, &provider);
        flow.edit(Field::Password, "hunter22");
        submit(&mut flow, &provider);

        assert_eq!(flow.state(), AuthState::Succeeded);
        assert_eq!(provider.calls().iter().filter(|c| c.starts_with("profile:")).count(), 2);
    }

    #[test]
    fn untaken_redirect_does_not_survive_a_later_non_vendor_sign_in() {
        let vendor = ScriptedProvider::with_role("vendor");
        let couple = ScriptedProvider::with_role("couple");
        let mut flow = sign_in_flow();
        let mut clock = FakeClock::default();

        submit(&mut flow, &vendor);
        assert!(flow.pending_redirect().is_some());

        flow.edit(Field::Password, "hunter23");
        let attempt = flow.begin().unwrap();
        assert_eq!(flow.pending_redirect(), None);
        assert!(flow.finish(block_on(run(&couple, attempt, DEFAULT_DASHBOARD_PATH))));

        assert_eq!(flow.outcome(), Some(&AuthOutcome::Failure(NOT_A_VENDOR.into())));
        assert!(schedule_redirect(&mut flow, &mut clock).is_none());
        clock.advance(Duration::from_secs(5));
        assert!(clock.navigations().is_empty());
    }

    #[test]
    fn failed_completion_clears_any_pending_redirect() {
        let mut flow = sign_in_flow();
        let attempt = flow.begin().unwrap();
        flow.redirect = Some(Redirect { target: "/stale".into(), delay: REDIRECT_DELAY });
        assert!(flow.finish(Completion {
            attempt: attempt.id,
            outcome: AuthOutcome::Failure("nope".into()),
        }));
        assert_eq!(flow.take_redirect(), None);
    }

    #[test]
    fn cancelled_redirect_never_fires() {
        let mut clock = FakeClock::default();
        let task = clock.schedule(Redirect {
            target: "/vendor/dashboard".into(),
            delay: REDIRECT_DELAY,
        });
        task.cancel();
        clock.advance(Duration::from_secs(5));
        assert!(clock.navigations().is_empty());
    }

    #[test]
    fn password_is_redacted_in_debug_output() {
        let form = VendorCredentialForm::default().with(Field::Password, "hunter22");
        assert!(!format!("{:?}", form).contains("hunter22"));
    }
}
