use dioxus::prelude::*;

use crate::icons::brands::{FaGithub, FaLinkedin};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Site footer: copyright line and profile links.
#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        footer { class: "footer",
            p { class: "footer__copy", "© {year} Portfolio. All rights reserved." }
            div { class: "footer__social",
                a {
                    class: "footer__link",
                    href: "https://github.com",
                    target: "_blank",
                    rel: "noreferrer",
                    aria_label: "GitHub",
                    Icon { icon: FaGithub, width: 18, height: 18 }
                }
                a {
                    class: "footer__link",
                    href: "https://www.linkedin.com",
                    target: "_blank",
                    rel: "noreferrer",
                    aria_label: "LinkedIn",
                    Icon { icon: FaLinkedin, width: 18, height: 18 }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> u32 {
    use chrono::Datelike;
    chrono::Utc::now().year() as u32
}
