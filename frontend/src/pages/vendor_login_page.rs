use crate::pages::error_page::error_page;
use crate::redirect::BrowserRedirect;
use crate::supabase::SupabaseClient;
use crate::config::Launch;
use crate::State;
use common::auth::{
    self, Attempt, AuthMode, AuthOutcome, Completion, Field, SubmitError, VendorAuthFlow, MIN_PASSWORD_LEN,
};
use common::catalog::VendorCategory;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const UNAVAILABLE: &str = "Sign in is unavailable right now. Please try again later.";

/// The auth flow plus the attempt the page should send next.

#[derive(Clone, Default)]
pub struct LoginState {
    flow: VendorAuthFlow,
    launch: Option<Attempt>,
    error: Option<String>,
}

pub enum LoginAction {
    Edit(Field, String),
    ToggleMode,
    Submit,
    Finish(Completion),
    RedirectTaken,
}

impl Reducible for LoginState {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: LoginAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LoginAction::Edit(field, value) => {
                if !next.flow.edit(field, value) {
                    return self;
                }
                next.error = None;
            }
            LoginAction::ToggleMode => {
                if !next.flow.toggle_mode() {
                    return self;
                }
                next.error = None;
            }
            LoginAction::Submit => match next.flow.begin() {
                Ok(attempt) => {
                    next.launch = Some(attempt);
                    next.error = None;
                }
                Err(SubmitError::Busy) => return self,
                Err(err) => next.error = Some(err.to_string()),
            },
            LoginAction::Finish(completion) => {
                if !next.flow.finish(completion) {
                    return self;
                }
                next.launch = None;
            }
            LoginAction::RedirectTaken => {
                if next.flow.take_redirect().is_none() {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Vendor sign in and sign up. A vendor who signs in is sent to the dashboard
/// shortly after the confirmation appears.

#[function_component(VendorLoginPage)]
pub fn vendor_login_page() -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let login = use_reducer(LoginState::default);

    // send each new attempt exactly once, after the config load has settled
    {
        let dispatcher = login.dispatcher();
        let launch = login.launch.clone();
        let config = state.config.clone();
        let key = (login.launch.as_ref().map(|a| a.id), state.config.is_settled());
        use_effect_with(key, move |_| {
            if let Some(attempt) = launch {
                let ready = match config.launch() {
                    Launch::Wait => None,
                    Launch::Send(config) => Some(Ok(config.clone())),
                    Launch::Unavailable => Some(Err(attempt.id)),
                };
                match ready {
                    None => log::info!("auth attempt {} waiting for site config", attempt.id),
                    Some(Ok(config)) => spawn_local(async move {
                        let client = SupabaseClient::new(&config);
                        let completion = auth::run(&client, attempt, &config.dashboard_path).await;
                        dispatcher.dispatch(LoginAction::Finish(completion));
                    }),
                    Some(Err(id)) => dispatcher.dispatch(LoginAction::Finish(Completion {
                        attempt: id,
                        outcome: AuthOutcome::Failure(UNAVAILABLE.to_owned()),
                    })),
                }
            }
            || {}
        });
    }

    {
        let dispatcher = login.dispatcher();
        let mut flow = login.flow.clone();
        use_effect_with(login.flow.pending_redirect().cloned(), move |_| {
            if let Some(task) = auth::schedule_redirect(&mut flow, &mut BrowserRedirect) {
                task.forget();
                dispatcher.dispatch(LoginAction::RedirectTaken);
            }
            || {}
        });
    }

    let on_field = |field: Field| {
        let dispatcher = login.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                dispatcher.dispatch(LoginAction::Edit(field, input.value()));
            }
        })
    };

    let on_category = {
        let dispatcher = login.dispatcher();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                dispatcher.dispatch(LoginAction::Edit(Field::Category, select.value()));
            }
        })
    };

    let submit = {
        let dispatcher = login.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(LoginAction::Submit);
        })
    };

    let toggle = {
        let dispatcher = login.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(LoginAction::ToggleMode))
    };

    let flow = &login.flow;
    let form = flow.form();
    let signing_up = flow.mode() == AuthMode::SignUp;
    let submitting = flow.is_submitting();

    let text_input = |field: Field, kind: &'static str| html! {
        <div class="form-section">
            <label for={field.name()}>{field.label()}</label>
            <input
                type={kind}
                id={field.name()}
                value={form.get(field).to_owned()}
                oninput={on_field(field)}
                disabled={submitting}
                required=true
            />
        </div>
    };

    html! {
        <div class="vendor-login">
            <h2>{if signing_up {"Create your vendor account"} else {"Vendor sign in"}}</h2>

            <form onsubmit={submit} class="stacked-form">
                if signing_up {
                    { text_input(Field::Name, "text") }
                    { text_input(Field::BusinessName, "text") }
                    <div class="form-section">
                        <label for={Field::Category.name()}>{Field::Category.label()}</label>
                        <select id={Field::Category.name()} onchange={on_category} disabled={submitting} required=true>
                            <option value="" selected={form.category.is_empty()}>{"choose a category"}</option>
                            { for VendorCategory::ALL.into_iter().map(|category| {
                                let key = category.to_string();
                                let selected = form.category == key;
                                html! {
                                    <option {selected} value={key}>{category.label()}</option>
                                }
                            }) }
                        </select>
                    </div>
                    { text_input(Field::Phone, "tel") }
                    { text_input(Field::Location, "text") }
                }

                { text_input(Field::Email, "email") }
                <div class="form-section">
                    <label for={Field::Password.name()}>{Field::Password.label()}</label>
                    <input
                        type="password"
                        id={Field::Password.name()}
                        value={form.password.clone()}
                        oninput={on_field(Field::Password)}
                        disabled={submitting}
                        minlength={MIN_PASSWORD_LEN.to_string()}
                        required=true
                    />
                </div>

                if let Some(err) = login.error.clone() {
                    <p class="form-error">{err}</p>
                }
                { match flow.outcome() {
                    Some(AuthOutcome::Success { message, .. }) => html! { <p class="form-success">{message.clone()}</p> },
                    Some(AuthOutcome::Failure(message)) => html! { <p class="form-error">{message.clone()}</p> },
                    _ => html! {},
                } }

                <input
                    type="submit"
                    class="button highlight"
                    disabled={submitting}
                    value={match (submitting, signing_up) {
                        (true, _) => "please wait...",
                        (false, true) => "create account",
                        (false, false) => "sign in",
                    }}
                />
            </form>

            <button type="button" class="button link" onclick={toggle} disabled={submitting}>
                {if signing_up {"Already have an account? Sign in"} else {"New here? Create a vendor account"}}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Rc<LoginState> {
        let state = Rc::new(LoginState::default());
        let state = state.reduce(LoginAction::Edit(Field::Email, "studio@example.com".into()));
        state.reduce(LoginAction::Edit(Field::Password, "hunter22".into()))
    }

    #[test]
    fn submit_queues_one_attempt_until_it_finishes() {
        let state = filled().reduce(LoginAction::Submit);
        let attempt = state.launch.clone().unwrap();
        assert!(state.flow.is_submitting());

        let again = state.clone().reduce(LoginAction::Submit);
        assert!(Rc::ptr_eq(&state, &again));

        let state = state.reduce(LoginAction::Finish(Completion {
            attempt: attempt.id,
            outcome: AuthOutcome::Failure(UNAVAILABLE.to_owned()),
        }));
        assert!(state.launch.is_none());
        assert_eq!(state.flow.outcome(), Some(&AuthOutcome::Failure(UNAVAILABLE.to_owned())));
    }

    #[test]
    fn invalid_submit_reports_the_error_without_an_attempt() {
        let state = Rc::new(LoginState::default()).reduce(LoginAction::Submit);
        assert!(state.launch.is_none());
        assert!(state.error.is_some());
    }

    #[test]
    fn redirect_taken_without_a_pending_redirect_changes_nothing() {
        let state = filled();
        let after = state.clone().reduce(LoginAction::RedirectTaken);
        assert!(Rc::ptr_eq(&state, &after));
    }
}
