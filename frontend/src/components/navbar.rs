use crate::nav::link;
use crate::pages::error_page::error_page;
use crate::State;
use common::{resolve, ViewId};
use gloo::events::EventListener;
use gloo::utils::{document, window};
use yew::prelude::*;

/// The views linked from the navbar, with their labels.

const LINKS: &[(&str, &str)] = &[
    ("marketplace", "marketplace"),
    ("services/planning", "planning tools"),
    ("vendors/pricing", "pricing"),
    ("help", "help"),
    ("vendors/login", "vendor login"),
];

/// The navbar class after scrolling from `prev` to `now`, if it changes.

fn scrolled_class(prev: i32, now: i32) -> Option<&'static str> {
    if now > prev {
        Some("navbar hide")
    }
    else if now < prev {
        Some("navbar")
    }
    else {
        None
    }
}

/// A navbar component that lets the user visit the main views. It hides
/// itself while scrolling down and comes back when scrolling up.

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let Some(state) = use_context::<State>() else { return error_page() };
    let current = resolve(&state.key);

    let prev_s = use_mut_ref(|| 0);
    let navbar_class = use_state(|| "navbar");

    // one listener for the navbar's lifetime, removed on unmount
    {
        let navbar_class = navbar_class.setter();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "scroll", move |_| {
                let Some(scrolling_element) = document().scrolling_element() else { return; };
                let s = scrolling_element.scroll_top();

                let prev = std::mem::replace(&mut *prev_s.borrow_mut(), s);
                if let Some(class) = scrolled_class(prev, s) {
                    navbar_class.set(class);
                }
            });
            move || drop(listener)
        });
    }

    // services links stay lit on every service page
    let is_current = |key: &str| match (&current, resolve(key)) {
        (ViewId::Services(_), ViewId::Services(_)) => true,
        (current, target) => *current == target,
    };

    html! {
        <div class={*navbar_class}>
            <div class="navbar-item brand">
                <button class="button" onclick={link(&state.navigate, common::HOME_KEY)}>{"ever after"}</button>
            </div>
            { for LINKS.iter().map(|&(key, label)| html! {
                <div class="navbar-item">
                    <button
                        class={if is_current(key) {"button highlight"} else {"button"}}
                        onclick={link(&state.navigate, key)}
                    >
                        {label}
                    </button>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_going_down_and_shows_going_up() {
        assert_eq!(scrolled_class(0, 40), Some("navbar hide"));
        assert_eq!(scrolled_class(40, 10), Some("navbar"));
        assert_eq!(scrolled_class(10, 10), None);
    }
}
