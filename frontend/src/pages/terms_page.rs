use yew::prelude::*;

const SECTIONS: &[(&str, &str)] = &[
    ("Accounts", "You're responsible for keeping your login details safe and for everything done with your account. Vendor accounts must belong to a real, operating business."),
    ("Listings and reviews", "Vendors must describe their services accurately. Reviews must reflect genuine experiences; we remove reviews that are fake or abusive."),
    ("Payments", "Vendor plans are billed in advance, monthly or yearly. You can cancel at any time and keep access until the end of the paid period."),
    ("Bookings", "Agreements between couples and vendors are made directly between them. We aren't a party to those agreements."),
    ("Changes", "We may update these terms. If the changes are significant we'll let you know by email before they take effect."),
];

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! {
        <div class="info legal">
            <h2>{"Terms of Service"}</h2>
            { for SECTIONS.iter().map(|&(heading, body)| html! {
                <section>
                    <h3>{heading}</h3>
                    <p>{body}</p>
                </section>
            }) }
        </div>
    }
}
