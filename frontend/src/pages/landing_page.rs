use crate::nav::link;
use crate::pages::error_page::error_page;
use crate::State;
use common::catalog::ServiceKind;
use yew::prelude::*;

/// The home view.

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let nav = &state.navigate;

    html! {
        <div class="landing">
            <div class="hero">
                <h1>{"Plan the day. Find the people. Enjoy the moment."}</h1>
                <p>{"Trusted local vendors and free planning tools for every couple."}</p>
                <div class="hero-actions">
                    <button class="button highlight" onclick={link(nav, "marketplace")}>{"find vendors"}</button>
                    <button class="button" onclick={link(nav, "vendors/join")}>{"list your business"}</button>
                </div>
            </div>

            <h2>{"Planning tools"}</h2>
            <div class="card-grid">
                { for ServiceKind::ALL.into_iter().map(|kind| {
                    let content = kind.content();
                    html! {
                        <div class="card" onclick={link(nav, format!("services/{}", kind.key()))}>
                            <h3>{content.title}</h3>
                            <p>{content.tagline}</p>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
