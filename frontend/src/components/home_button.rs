use crate::nav::NavEvent;
use crate::pages::error_page::error_page;
use crate::State;
use yew::prelude::*;

/// A floating "home" button shown over every view.

#[function_component(HomeButton)]
pub fn home_button() -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let onclick = Callback::from(move |_| state.navigate.dispatch(NavEvent::Home));

    html! {
        <button class="home-button" title="back to home" {onclick}>{ "⌂ home" }</button>
    }
}
