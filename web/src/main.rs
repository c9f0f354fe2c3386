use dioxus::prelude::*;

use ui::views::{AboutView, ContactView, HomeView, ProjectsView};
use ui::{nav, Footer, Navbar, Page};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // The bundle is useless without its data source; refuse to start.
    api::Config::from_env().expect("Missing Supabase environment variables");

    dioxus::launch(App);
}

/// Application shell: navbar and footer around the active page view.
///
/// The page set is closed and navigation is a signal swap, so there is no
/// URL routing. Views are dropped and remounted on every switch, which is
/// what restarts their fetches.
#[component]
fn App() -> Element {
    let mut current = use_signal(Page::default);
    let on_navigate = move |page: Page| current.set(page);
    let active = current();
    let title = nav::title_for(active.slug());

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "{title}" }

        div { class: "shell",
            Navbar { active, on_navigate }
            main { class: "shell__main",
                {match active {
                    Page::Home => rsx! {
                        HomeView { on_navigate }
                    },
                    Page::Projects => rsx! {
                        ProjectsView {}
                    },
                    Page::About => rsx! {
                        AboutView {}
                    },
                    Page::Contact => rsx! {
                        ContactView {}
                    },
                }}
            }
            Footer {}
        }
    }
}
