use crate::nav::link;
use crate::pages::error_page::error_page;
use crate::State;
use yew::prelude::*;

const REASONS: &[(&str, &str)] = &[
    ("Get found", "Couples search by category and location. Show up when they're ready to book."),
    ("Manage enquiries", "One inbox for every enquiry, with reminders so no lead goes cold."),
    ("Grow with reviews", "Collect verified reviews from the couples you've worked with."),
];

/// The pitch for vendors thinking about listing their business.

#[function_component(VendorsJoinPage)]
pub fn vendors_join_page() -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let nav = &state.navigate;

    html! {
        <div class="vendors-join">
            <h2>{"Grow your wedding business"}</h2>
            <div class="card-grid">
                { for REASONS.iter().map(|&(title, body)| html! {
                    <div class="card">
                        <h3>{title}</h3>
                        <p>{body}</p>
                    </div>
                }) }
            </div>
            <div class="cta">
                <button class="button highlight" onclick={link(nav, "vendors/login")}>{"create a vendor account"}</button>
                <button class="button" onclick={link(nav, "vendors/pricing")}>{"see pricing"}</button>
            </div>
        </div>
    }
}
