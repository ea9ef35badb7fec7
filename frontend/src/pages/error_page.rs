use yew::prelude::*;

/// A bare error page for when a view can't even reach the app state.

pub fn error_page() -> Html {
    html! {
        <div class="error-page">
            <h2>{ "oh no! something went wrong on our end" }</h2>
            <p>{ "please refresh the page and try again" }</p>
        </div>
    }
}
