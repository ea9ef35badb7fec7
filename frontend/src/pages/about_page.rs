use yew::prelude::*;

/// Who we are and why the marketplace exists.

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="info">
            <h2>{"About Ever After"}</h2>

            <p>{"Ever After started with a simple idea: planning a wedding should feel exciting, not exhausting. We bring couples and the local vendors who make weddings happen together in one place, with the planning tools to keep everything on track."}</p>

            <h3>{"For couples"}</h3>
            <p>{"Browse photographers, venues, florists and more in your area, compare them side by side and keep your plans, budget and guest list in one shared space."}</p>

            <h3>{"For vendors"}</h3>
            <p>{"Small wedding businesses are the heart of the industry. Our vendor plans help you get found by the right couples, manage enquiries and grow through reviews, without the big agency fees."}</p>

            <h3>{"Our values"}</h3>
            <ul>
                <li>{"Honest reviews from real couples"}</li>
                <li>{"Fair, transparent pricing for vendors"}</li>
                <li>{"Your data stays yours"}</li>
            </ul>
        </div>
    }
}
