use dioxus::prelude::*;

use api::AboutInfo;

use crate::icons::{FaAward, FaBriefcase, FaGraduationCap};
use crate::remote::{render_remote, use_remote, EmptyNotice};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const FETCH_ERROR: &str = "Failed to load about info";
const NOT_AVAILABLE: &str = "About information not available.";
const EXPERIENCE_PLACEHOLDER: &str = "Experience information will be added soon.";
const EDUCATION_PLACEHOLDER: &str = "Education information will be added soon.";
const SKILLS_PLACEHOLDER: &str = "Skills will be added soon.";

/// Profile page backed by the singleton `about` row.
///
/// The row is optional: a project that hasn't filled it in yet gets the
/// "not available" notice instead of an error.
#[component]
pub fn AboutView() -> Element {
    let about = use_remote(FETCH_ERROR, |client| async move {
        client
            .fetch_one_or_absent::<AboutInfo>(AboutInfo::TABLE)
            .await
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        {render_remote(about(), |about| match about {
            None => rsx! {
                EmptyNotice { message: NOT_AVAILABLE }
            },
            Some(info) => rsx! {
                AboutContent { about: info.clone() }
            },
        })}
    }
}

#[component]
fn AboutContent(about: AboutInfo) -> Element {
    let experience = experience_text(&about).to_string();
    let education = education_text(&about).to_string();

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h1 { "About Me" }
                p { "Get to know more about my background and expertise" }
            }
            section { class: "card card--story",
                div { class: "card__heading",
                    Icon { icon: FaAward, width: 28, height: 28 }
                    h2 { "My Story" }
                }
                p { class: "card__text card__text--prewrap", "{about.bio}" }
            }
            div { class: "card-grid",
                section { class: "card",
                    div { class: "card__heading",
                        Icon { icon: FaBriefcase, width: 28, height: 28 }
                        h2 { "Experience" }
                    }
                    p { class: "card__text card__text--prewrap", "{experience}" }
                }
                section { class: "card",
                    div { class: "card__heading",
                        Icon { icon: FaGraduationCap, width: 28, height: 28 }
                        h2 { "Education" }
                    }
                    p { class: "card__text card__text--prewrap", "{education}" }
                }
            }
            section { class: "card card--skills",
                h2 { class: "card__title-center", "Skills & Technologies" }
                {match skill_chips(&about) {
                    None => rsx! {
                        p { class: "card__text card__text--center", {SKILLS_PLACEHOLDER} }
                    },
                    Some(skills) => rsx! {
                        div { class: "chip-row chip-row--center",
                            for skill in skills.iter() {
                                span { class: "chip chip--raised", "{skill}" }
                            }
                        }
                    },
                }}
            }
        }
    }
}

/// Experience copy, substituting the placeholder for an empty value.
fn experience_text(about: &AboutInfo) -> &str {
    if about.experience.is_empty() {
        EXPERIENCE_PLACEHOLDER
    } else {
        &about.experience
    }
}

/// Skill chips to render, or `None` when the list is empty and the
/// placeholder applies instead.
fn skill_chips(about: &AboutInfo) -> Option<&[String]> {
    if about.skills.is_empty() {
        None
    } else {
        Some(&about.skills)
    }
}

/// Education copy, substituting the placeholder for an empty value.
fn education_text(about: &AboutInfo) -> &str {
    if about.education.is_empty() {
        EDUCATION_PLACEHOLDER
    } else {
        &about.education
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about(bio: &str, skills: &[&str], experience: &str, education: &str) -> AboutInfo {
        AboutInfo {
            id: uuid::Uuid::new_v4(),
            bio: bio.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: experience.to_string(),
            education: education.to_string(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_filled_sections_pass_through_unchanged() {
        let about = about(
            "Bio",
            &["Rust"],
            "Five years of backend work",
            "BSc Computer Science",
        );
        assert_eq!(experience_text(&about), "Five years of backend work");
        assert_eq!(education_text(&about), "BSc Computer Science");
        assert_eq!(skill_chips(&about), Some(&["Rust".to_string()][..]));
    }

    #[test]
    fn test_empty_sections_get_placeholders() {
        let about = about("Bio", &[], "", "");
        assert_eq!(experience_text(&about), EXPERIENCE_PLACEHOLDER);
        assert_eq!(education_text(&about), EDUCATION_PLACEHOLDER);
    }

    #[test]
    fn test_sparse_row_keeps_bio_and_substitutes_everything_else() {
        // A row where only the bio was ever filled in.
        let about = about("X", &[], "", "");
        assert_eq!(about.bio, "X");
        assert_eq!(experience_text(&about), EXPERIENCE_PLACEHOLDER);
        assert_eq!(education_text(&about), EDUCATION_PLACEHOLDER);
        assert_eq!(skill_chips(&about), None);
    }

    #[test]
    fn test_whitespace_is_not_treated_as_empty() {
        // Substitution mirrors the storage rule: only the empty string
        // counts as unfilled.
        let about = about("Bio", &[], " ", "");
        assert_eq!(experience_text(&about), " ");
    }
}
