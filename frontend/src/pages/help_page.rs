use common::faq::{highlight, search, topics};
use yew::prelude::*;

fn marked(text: &str, query: &str) -> Html {
    highlight(text, query)
        .into_iter()
        .map(|segment| if segment.matched {
            html! { <mark>{segment.text.to_owned()}</mark> }
        } else {
            html! { {segment.text.to_owned()} }
        })
        .collect::<Html>()
}

/// Frequently asked questions with a live search box.

#[function_component(HelpPage)]
pub fn help_page() -> Html {
    let query = use_state(|| String::from(""));

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let results = search(&query);

    html! {
        <div class="info help">
            <h2>{"Help Centre"}</h2>
            <div class="form-section">
                <label for="faq_search">{"search:"}</label>
                <input type="text" id="faq_search" placeholder="e.g. cancel" value={(*query).clone()} oninput={on_input}/>
            </div>

            if results.is_empty() {
                <p>{"No questions match your search. Try different words, or contact support."}</p>
            }

            { for topics().into_iter().map(|topic| {
                let entries: Vec<_> = results.iter().filter(|e| e.topic == topic).collect();
                if entries.is_empty() {
                    return html! {};
                }
                html! {
                    <section>
                        <h3>{topic}</h3>
                        { for entries.into_iter().map(|entry| html! {
                            <details open={!query.trim().is_empty()}>
                                <summary>{marked(entry.question, &query)}</summary>
                                <p>{marked(entry.answer, &query)}</p>
                            </details>
                        }) }
                    </section>
                }
            }) }
        </div>
    }
}
