use crate::nav::NavEvent;
use crate::pages::error_page::error_page;
use crate::State;
use yew::prelude::*;

/// Shown for any navigation key we don't know. Its only control asks to go
/// home; it never navigates on its own.

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let onclick = Callback::from(move |_| state.navigate.dispatch(NavEvent::Home));

    html! {
        <div class="not-found">
            <h1>{ "404 - page not found" }</h1>
            <p>{ "We couldn't find the page you were looking for." }</p>
            <button {onclick} class="button">{ "go home" }</button>
        </div>
    }
}
