use common::models::PublicConfig;
use common::{resolve, ViewId};
use components::footer::Footer;
use config::ConfigStatus;
use components::home_button::HomeButton;
use components::navbar::Navbar;
use gloo::utils::window;
use nav::NavState;
use pages::about_page::AboutPage;
use pages::help_page::HelpPage;
use pages::landing_page::LandingPage;
use pages::marketplace_page::MarketplacePage;
use pages::not_found_page::NotFoundPage;
use pages::pricing_page::PricingPage;
use pages::privacy_page::PrivacyPage;
use pages::services_page::ServicesPage;
use pages::support_page::SupportPage;
use pages::terms_page::TermsPage;
use pages::vendor_login_page::VendorLoginPage;
use pages::vendors_join_page::VendorsJoinPage;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod config;
mod nav;
mod pages;
mod redirect;
mod supabase;
mod util;

/// App-wide state shared with every page.

#[derive(Clone, PartialEq)]
pub struct State {

    /// The navigation key of the view on screen.
    pub key: String,

    /// Where pages send navigation requests.
    pub navigate: UseReducerDispatcher<NavState>,

    /// Auth provider settings loaded from the server.
    pub config: ConfigStatus,
}

fn switch(view: ViewId) -> Html {
    match view {
        ViewId::Landing => html! { <LandingPage /> },
        ViewId::About => html! { <AboutPage /> },
        ViewId::Marketplace => html! { <MarketplacePage /> },
        ViewId::VendorsJoin => html! { <VendorsJoinPage /> },
        ViewId::VendorsLogin => html! { <VendorLoginPage /> },
        ViewId::VendorsPricing => html! { <PricingPage /> },
        ViewId::Privacy => html! { <PrivacyPage /> },
        ViewId::Terms => html! { <TermsPage /> },
        ViewId::Help => html! { <HelpPage /> },
        ViewId::Support => html! { <SupportPage /> },
        ViewId::Services(candidate) => html! { <ServicesPage {candidate} /> },
        ViewId::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let nav = use_reducer(NavState::default);
    let config = use_state(ConfigStatus::default);

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match util::get_json::<PublicConfig>("/api/config").await {
                    Ok(loaded) => config.set(ConfigStatus::Ready(Rc::new(loaded))),
                    Err(err) => {
                        log::error!("couldn't load site config: {:#}", err);
                        config.set(ConfigStatus::Failed);
                    }
                }
            });
            || {}
        });
    }

    use_effect_with(nav.key.clone(), |_| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        || {}
    });

    let state = State {
        key: nav.key.clone(),
        navigate: nav.dispatcher(),
        config: (*config).clone(),
    };
    let view = resolve(&nav.key);

    html! {
        <ContextProvider<State> context={state}>
            <Navbar />
            <main class={format!("view view-{}", view)}>
                { switch(view) }
            </main>
            <Footer />
            <HomeButton />
        </ContextProvider<State>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
