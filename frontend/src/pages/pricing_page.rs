use crate::nav::link;
use crate::pages::error_page::error_page;
use crate::State;
use common::catalog::{BillingCycle, PlanKind};
use yew::prelude::*;

/// Vendor plans with a monthly / yearly billing switch.

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let cycle = use_state(|| BillingCycle::Monthly);

    // no key yet, so this starts on the recommended plan
    let selected = use_state(|| PlanKind::from_key(""));

    let toggle = {
        let cycle = cycle.clone();
        Callback::from(move |_| cycle.set(cycle.toggled()))
    };

    html! {
        <div class="pricing">
            <h2>{"Simple pricing for vendors"}</h2>
            <div class="billing-toggle">
                <label for="yearly">{"bill yearly"}</label>
                <input type="checkbox" id="yearly" checked={*cycle == BillingCycle::Yearly} onclick={toggle}/>
            </div>

            <div class="card-grid">
                { for PlanKind::ALL.into_iter().map(|plan| {
                    let details = plan.details();
                    let choose = {
                        let selected = selected.clone();
                        Callback::from(move |_| selected.set(PlanKind::from_key(plan.key())))
                    };
                    html! {
                        <div class={if *selected == plan {"card plan highlight"} else {"card plan"}} onclick={choose}>
                            <h3>{details.name}</h3>
                            if details.highlighted {
                                <p class="badge">{"most popular"}</p>
                            }
                            <p class="price">{format!("${}/month", details.price(*cycle))}</p>
                            if *cycle == BillingCycle::Yearly {
                                <p class="savings">{format!("save ${} a year", details.yearly_savings())}</p>
                            }
                            <p>{details.description}</p>
                            <ul>{ for details.features.iter().map(|f| html! { <li>{*f}</li> }) }</ul>
                            <button class="button" onclick={link(&state.navigate, "vendors/login")}>{"get started"}</button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
