use crate::nav::link;
use crate::pages::error_page::error_page;
use crate::State;
use common::catalog::VendorCategory;
use yew::prelude::*;

#[function_component(MarketplacePage)]
pub fn marketplace_page() -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let nav = &state.navigate;

    html! {
        <div class="marketplace">
            <h2>{"Find your wedding team"}</h2>
            <p>{"Browse local vendors by category. Every business is reviewed by real couples."}</p>
            <div class="card-grid">
                { for VendorCategory::ALL.into_iter().map(|category| html! {
                    <div class="card category">
                        <h3>{category.label()}</h3>
                    </div>
                }) }
            </div>
            <div class="cta">
                <p>{"Are you a wedding professional?"}</p>
                <button class="button highlight" onclick={link(nav, "vendors/join")}>{"join the marketplace"}</button>
            </div>
        </div>
    }
}
