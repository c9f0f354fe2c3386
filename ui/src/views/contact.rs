use dioxus::prelude::*;

use api::ContactMessage;

use crate::icons::brands::{FaGithub, FaLinkedin};
use crate::icons::{FaEnvelope, FaLocationDot, FaPaperPlane};
use crate::remote::error_message;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const SUBMIT_ERROR: &str = "Failed to send message";
const SENT_NOTICE: &str = "Message sent successfully. I will get back to you soon!";

/// Contact page: static contact details next to the message form.
///
/// The form is the site's only write. Submissions are fire-and-forget;
/// nothing is read back beyond success or failure.
#[component]
pub fn ContactView() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            sent.set(false);

            let record = match validate(&name(), &email(), &subject(), &message()) {
                Ok(record) => record,
                Err(reason) => {
                    error.set(Some(reason));
                    return;
                }
            };

            sending.set(true);
            let outcome = match api::Client::from_env() {
                Ok(client) => client.insert(ContactMessage::TABLE, &record).await,
                Err(err) => Err(err),
            };
            match outcome {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                    sent.set(true);
                }
                Err(err) => {
                    tracing::error!("Failed to send message: {}", err);
                    error.set(Some(error_message(&err, SUBMIT_ERROR)));
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div { class: "page",
            header { class: "page__header",
                h1 { "Get In Touch" }
                p { "Have a project in mind? Let's talk about it" }
            }
            div { class: "contact-layout",
                section { class: "contact-info",
                    h2 { "Contact Information" }
                    p { class: "contact-info__blurb",
                        "Feel free to reach out through the form or any of the channels below. "
                        "I usually reply within a couple of days."
                    }
                    div { class: "contact-info__row",
                        Icon { icon: FaEnvelope, width: 18, height: 18 }
                        a { href: "mailto:hello@example.com", "hello@example.com" }
                    }
                    div { class: "contact-info__row",
                        Icon { icon: FaLocationDot, width: 18, height: 18 }
                        span { "Remote, worldwide" }
                    }
                    div { class: "contact-info__social",
                        a {
                            href: "https://github.com",
                            target: "_blank",
                            rel: "noreferrer",
                            aria_label: "GitHub",
                            Icon { icon: FaGithub, width: 22, height: 22 }
                        }
                        a {
                            href: "https://www.linkedin.com",
                            target: "_blank",
                            rel: "noreferrer",
                            aria_label: "LinkedIn",
                            Icon { icon: FaLinkedin, width: 22, height: 22 }
                        }
                    }
                }
                form { class: "contact-form", onsubmit: handle_submit,
                    if sent() {
                        div { class: "notice notice--success", {SENT_NOTICE} }
                    }
                    if let Some(reason) = error() {
                        div { class: "notice notice--error", role: "alert", "{reason}" }
                    }
                    label { class: "contact-form__field",
                        span { "Name" }
                        input {
                            r#type: "text",
                            placeholder: "Your name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    label { class: "contact-form__field",
                        span { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    label { class: "contact-form__field",
                        span { "Subject" }
                        input {
                            r#type: "text",
                            placeholder: "What is this about?",
                            value: subject(),
                            oninput: move |evt: FormEvent| subject.set(evt.value()),
                        }
                    }
                    label { class: "contact-form__field",
                        span { "Message" }
                        textarea {
                            rows: "6",
                            placeholder: "Tell me about your project...",
                            value: message(),
                            oninput: move |evt: FormEvent| message.set(evt.value()),
                        }
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: sending(),
                        if sending() {
                            "Sending..."
                        } else {
                            Icon { icon: FaPaperPlane, width: 16, height: 16 }
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}

/// Check and trim the form input, building the record to insert.
///
/// The reason string in the `Err` case is shown to the visitor as-is.
fn validate(name: &str, email: &str, subject: &str, message: &str) -> Result<ContactMessage, String> {
    let name = name.trim();
    let email = email.trim();
    let subject = subject.trim();
    let message = message.trim();

    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email".to_string());
    }
    if subject.is_empty() {
        return Err("Subject is required".to_string());
    }
    if message.is_empty() {
        return Err("Message is required".to_string());
    }

    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    })
}
