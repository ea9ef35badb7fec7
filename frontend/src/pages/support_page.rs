use common::contact::{ContactField, ContactForm, SUBJECTS};
use log::info;
use yew::prelude::*;

/// The contact form. Messages are acknowledged on the page.

#[function_component(SupportPage)]
pub fn support_page() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<String>);
    let submitted = use_state(|| false);

    let on_field = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                input.value()
            } else if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                area.value()
            } else {
                return;
            };
            form.set((*form).clone().with(field, value));
        })
    };

    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                form.set((*form).clone().with(ContactField::Subject, select.value()));
            }
        })
    };

    let submit = {
        let form = form.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    info!("contact message received ({})", form.subject);
                    error.set(None);
                    submitted.set(true);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    if *submitted {
        return html! {
            <div class="info support">
                <h2>{"Thanks for getting in touch!"}</h2>
                <p>{format!("We'll reply to {} within two business days.", form.email.trim())}</p>
            </div>
        };
    }

    html! {
        <div class="info support">
            <h2>{"Contact Support"}</h2>
            <p>{"Questions about your account, a listing or billing? Send us a message."}</p>
            <form onsubmit={submit} class="stacked-form">
                <label for="contact_name">{ContactField::Name.label()}</label>
                <input type="text" id="contact_name" value={form.name.clone()} oninput={on_field(ContactField::Name)}/>

                <label for="contact_email">{ContactField::Email.label()}</label>
                <input type="email" id="contact_email" value={form.email.clone()} oninput={on_field(ContactField::Email)}/>

                <label for="contact_subject">{ContactField::Subject.label()}</label>
                <select id="contact_subject" onchange={on_subject}>
                    <option value="" selected={form.subject.is_empty()}>{"choose a subject"}</option>
                    { for SUBJECTS.iter().map(|&subject| html! {
                        <option value={subject} selected={form.subject == subject}>{subject}</option>
                    }) }
                </select>

                <label for="contact_message">{ContactField::Message.label()}</label>
                <textarea id="contact_message" value={form.message.clone()} oninput={on_field(ContactField::Message)}/>

                if let Some(err) = (*error).clone() {
                    <p class="form-error">{err}</p>
                }
                <input type="submit" value="send message" class="button"/>
            </form>
        </div>
    }
}
