use dioxus::prelude::*;

use crate::icons::{FaBars, FaXmark};
use crate::nav::Page;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top navigation bar: brand, one link per page, and a collapsible menu
/// for narrow screens.
#[component]
pub fn Navbar(active: Page, on_navigate: EventHandler<Page>) -> Element {
    let mut menu_open = use_signal(|| false);

    // Collapse the menu before handing the page over, so navigating from
    // the mobile menu doesn't leave it covering the new view.
    let mut navigate = move |page: Page| {
        menu_open.set(false);
        on_navigate.call(page);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header { class: "navbar",
            div { class: "navbar__inner",
                button {
                    class: "navbar__brand",
                    onclick: move |_| navigate(Page::Home),
                    "Portfolio"
                }
                nav { class: "navbar__links",
                    for page in Page::ALL {
                        NavLink { page, active: page == active, on_navigate: navigate }
                    }
                }
                button {
                    class: "navbar__toggle",
                    aria_label: "Toggle navigation menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        Icon { icon: FaXmark, width: 20, height: 20 }
                    } else {
                        Icon { icon: FaBars, width: 20, height: 20 }
                    }
                }
            }
            if menu_open() {
                nav { class: "navbar__menu",
                    for page in Page::ALL {
                        NavLink { page, active: page == active, on_navigate: navigate }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(page: Page, active: bool, on_navigate: EventHandler<Page>) -> Element {
    let class = if active {
        "nav-link nav-link--active"
    } else {
        "nav-link"
    };
    let slug = page.slug();

    rsx! {
        button {
            class: "{class}",
            id: "nav-{slug}",
            onclick: move |_| on_navigate.call(page),
            {page.label()}
        }
    }
}
