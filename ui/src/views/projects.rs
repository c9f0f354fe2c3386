use dioxus::prelude::*;

use api::Project;

use crate::icons::brands::FaGithub;
use crate::icons::FaArrowUpRightFromSquare;
use crate::remote::{render_remote, use_remote, EmptyNotice};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const FETCH_ERROR: &str = "Failed to load projects";

/// Grid of showcased projects, fetched once per mount.
#[component]
pub fn ProjectsView() -> Element {
    let projects = use_remote(FETCH_ERROR, |client| async move {
        client
            .fetch_all::<Project>(Project::TABLE)
            .await
            .map(Project::sorted_for_display)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        {render_remote(projects(), |projects| {
            if projects.is_empty() {
                rsx! {
                    EmptyNotice { message: "Projects will be added soon." }
                }
            } else {
                rsx! {
                    div { class: "page",
                        header { class: "page__header",
                            h1 { "My Projects" }
                            p { "A selection of things I have designed and built" }
                        }
                        div { class: "project-grid",
                            for project in projects.iter() {
                                ProjectCard { key: "{project.id}", project: project.clone() }
                            }
                        }
                    }
                }
            }
        })}
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "project-card",
            img {
                class: "project-card__image",
                src: "{project.image_url}",
                alt: "{project.title}",
            }
            div { class: "project-card__body",
                h2 { class: "project-card__title", "{project.title}" }
                p { class: "project-card__description", "{project.description}" }
                div { class: "chip-row",
                    for tech in project.technologies.iter() {
                        span { class: "chip", "{tech}" }
                    }
                }
                div { class: "project-card__links",
                    if let Some(demo_url) = project.demo_url.as_ref() {
                        a {
                            class: "project-card__link",
                            href: "{demo_url}",
                            target: "_blank",
                            rel: "noreferrer",
                            Icon { icon: FaArrowUpRightFromSquare, width: 16, height: 16 }
                            "Live Demo"
                        }
                    }
                    if let Some(github_url) = project.github_url.as_ref() {
                        a {
                            class: "project-card__link",
                            href: "{github_url}",
                            target: "_blank",
                            rel: "noreferrer",
                            Icon { icon: FaGithub, width: 16, height: 16 }
                            "Code"
                        }
                    }
                }
            }
        }
    }
}
