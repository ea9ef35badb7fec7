use crate::nav::link;
use crate::pages::error_page::error_page;
use crate::State;
use common::catalog::ServiceKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServicesPageProps {

    /// The text after `services/` in the navigation key. Unknown values show
    /// the planning page.
    pub candidate: String,
}

#[function_component(ServicesPage)]
pub fn services_page(props: &ServicesPageProps) -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let nav = &state.navigate;
    let kind = ServiceKind::from_key(&props.candidate);
    let content = kind.content();

    html! {
        <div class="services">
            <div class="tabs">
                { for ServiceKind::ALL.into_iter().map(|other| html! {
                    <button
                        class={if other == kind {"button highlight"} else {"button"}}
                        onclick={link(nav, format!("services/{}", other.key()))}
                    >
                        {other.content().title}
                    </button>
                }) }
            </div>

            <h2>{content.title}</h2>
            <p class="tagline">{content.tagline}</p>

            <div class="columns">
                <div>
                    <h3>{"Features"}</h3>
                    <ul>{ for content.features.iter().map(|f| html! { <li>{*f}</li> }) }</ul>
                </div>
                <div>
                    <h3>{"Why couples love it"}</h3>
                    <ul>{ for content.benefits.iter().map(|b| html! { <li>{*b}</li> }) }</ul>
                </div>
            </div>
        </div>
    }
}
