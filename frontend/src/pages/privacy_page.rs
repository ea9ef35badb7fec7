use yew::prelude::*;

const SECTIONS: &[(&str, &str)] = &[
    ("What we collect", "Account details you give us (name, email, and for vendors your business details), the plans you create, and basic usage information such as pages visited."),
    ("How we use it", "To run your account, show your listing to couples, send service emails you can't opt out of (like email verification) and improve the product. We never sell personal data."),
    ("Who we share it with", "Only the service providers that host our site and handle authentication and payments, under contracts that limit their use of your data."),
    ("Your choices", "You can update or delete your account at any time from your settings, or contact us and we'll do it for you."),
    ("Cookies", "We use a small number of cookies to keep you signed in and to understand which pages are useful. No third-party advertising cookies."),
];

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! {
        <div class="info legal">
            <h2>{"Privacy Policy"}</h2>
            { for SECTIONS.iter().map(|&(heading, body)| html! {
                <section>
                    <h3>{heading}</h3>
                    <p>{body}</p>
                </section>
            }) }
        </div>
    }
}
