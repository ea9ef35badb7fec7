use common::HOME_KEY;
use log::info;
use std::rc::Rc;
use yew::prelude::*;

/// The key of the view currently on screen. Only changed through `NavEvent`s.

#[derive(Clone, PartialEq, Debug)]
pub struct NavState {
    pub key: String,
}

pub enum NavEvent {
    Go(String),
    Home,
}

impl Default for NavState {
    fn default() -> Self {
        NavState { key: HOME_KEY.to_owned() }
    }
}

impl Reducible for NavState {
    type Action = NavEvent;

    fn reduce(self: Rc<Self>, action: NavEvent) -> Rc<Self> {
        let key = match action {
            NavEvent::Go(key) => key,
            NavEvent::Home => HOME_KEY.to_owned(),
        };
        if key == self.key {
            return self;
        }
        info!("navigating to {}", key);
        Rc::new(NavState { key })
    }
}

/// A click handler that navigates to `key`.

pub fn link(navigate: &UseReducerDispatcher<NavState>, key: impl Into<String>) -> Callback<MouseEvent> {
    let navigate = navigate.clone();
    let key = key.into();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigate.dispatch(NavEvent::Go(key.clone()));
    })
}
