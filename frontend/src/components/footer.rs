use crate::nav::link;
use crate::pages::error_page::error_page;
use crate::State;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let nav = &state.navigate;

    html! {
        <footer class="footer">
            <div class="footer-links">
                <a href="#" onclick={link(nav, "about")}>{"about"}</a>
                <a href="#" onclick={link(nav, "vendors/join")}>{"list your business"}</a>
                <a href="#" onclick={link(nav, "help")}>{"help centre"}</a>
                <a href="#" onclick={link(nav, "support")}>{"contact us"}</a>
                <a href="#" onclick={link(nav, "privacy")}>{"privacy"}</a>
                <a href="#" onclick={link(nav, "terms")}>{"terms"}</a>
            </div>
            <p class="footer-note">{"© Ever After. Made with love for couples and the vendors who make their day."}</p>
        </footer>
    }
}
