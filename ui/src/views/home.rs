use dioxus::prelude::*;

use crate::icons::{FaArrowRight, FaBolt, FaCode, FaPalette};
use crate::nav::Page;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Landing page. Static copy only; the buttons are the one place a view
/// originates navigation.
#[component]
pub fn HomeView(on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div { class: "home",
            section { class: "hero",
                h1 { class: "hero__title",
                    "Hi, I'm a "
                    span { class: "hero__accent", "Full Stack Developer" }
                }
                p { class: "hero__tagline",
                    "Passionate about building exceptional digital experiences that make a difference. "
                    "Specialized in modern web technologies and creative problem-solving."
                }
                div { class: "hero__actions",
                    button {
                        class: "button button--primary",
                        onclick: move |_| on_navigate.call(Page::Projects),
                        "View My Work"
                        Icon { icon: FaArrowRight, width: 20, height: 20 }
                    }
                    button {
                        class: "button button--outline",
                        onclick: move |_| on_navigate.call(Page::Contact),
                        "Get In Touch"
                    }
                }
            }
            section { class: "features",
                h2 { class: "section-title", "What I Do Best" }
                div { class: "feature-grid",
                    FeatureCard {
                        title: "Clean Code",
                        description: "Writing maintainable and scalable code following best practices",
                        icon: rsx! {
                            Icon { icon: FaCode, width: 32, height: 32 }
                        },
                    }
                    FeatureCard {
                        title: "Beautiful Design",
                        description: "Creating stunning user interfaces with attention to detail",
                        icon: rsx! {
                            Icon { icon: FaPalette, width: 32, height: 32 }
                        },
                    }
                    FeatureCard {
                        title: "Fast Performance",
                        description: "Optimized applications for the best user experience",
                        icon: rsx! {
                            Icon { icon: FaBolt, width: 32, height: 32 }
                        },
                    }
                }
            }
            section { class: "cta",
                h2 { class: "section-title", "Ready to Start Your Next Project?" }
                p { class: "cta__tagline", "Let's work together to bring your ideas to life" }
                button {
                    class: "button button--primary",
                    onclick: move |_| on_navigate.call(Page::Contact),
                    "Contact Me Now"
                    Icon { icon: FaArrowRight, width: 20, height: 20 }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: String, description: String, icon: Element) -> Element {
    rsx! {
        div { class: "feature-card",
            div { class: "feature-card__icon", {icon} }
            h3 { class: "feature-card__title", "{title}" }
            p { class: "feature-card__description", "{description}" }
        }
    }
}
