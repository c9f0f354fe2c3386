//! Typed records for the tables behind the site.
//!
//! Field names follow the remote schema so the structs (de)serialize
//! straight to and from PostgREST JSON. The one exception is
//! [`Project::display_order`], which maps to the `order` column.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A showcased project, one row of the `projects` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Technology tags rendered as chips on the card.
    pub technologies: Vec<String>,
    pub image_url: String,
    /// Link to a running deployment, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    /// Link to the source repository, when it is public.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Position in the projects grid; lower values come first.
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub const TABLE: &'static str = "projects";

    /// Sort a fetched batch into grid order.
    ///
    /// Ordering happens here rather than in the query so a batch is always
    /// presentable no matter how the rows arrived. The sort is stable, so
    /// rows sharing a `display_order` keep their fetched relative order.
    pub fn sorted_for_display(mut projects: Vec<Project>) -> Vec<Project> {
        projects.sort_by_key(|project| project.display_order);
        projects
    }
}

/// The owner's profile, kept as a single row in the `about` table.
///
/// Any of the text fields may be empty; the about page substitutes
/// placeholder copy for the ones that are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub id: Uuid,
    pub bio: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub updated_at: DateTime<Utc>,
}

impl AboutInfo {
    pub const TABLE: &'static str = "about";
}

/// A visitor message submitted from the contact form.
///
/// Write-only: the form builds one, hands it to [`crate::Client::insert`],
/// and never reads it back.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub const TABLE: &'static str = "contact_messages";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(title: &str, display_order: i32) -> Project {
        Project {
            id: Uuid::nil(),
            title: title.to_string(),
            description: String::new(),
            technologies: Vec::new(),
            image_url: String::new(),
            demo_url: None,
            github_url: None,
            display_order,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_project_deserializes_from_service_row() {
        let row = json!({
            "id": "5f8b1f5e-4f9d-4f09-9c9d-0c84b3c1a111",
            "title": "Route Planner",
            "description": "Multi-stop route optimisation in the browser",
            "technologies": ["Rust", "WebAssembly"],
            "image_url": "https://cdn.example.com/route-planner.png",
            "demo_url": "https://routes.example.com",
            "github_url": null,
            "order": 2,
            "created_at": "2024-03-01T10:00:00+00:00",
            "updated_at": "2024-03-05T18:30:00+00:00"
        });

        let project: Project = serde_json::from_value(row).unwrap();
        assert_eq!(project.title, "Route Planner");
        assert_eq!(project.display_order, 2);
        assert_eq!(project.demo_url.as_deref(), Some("https://routes.example.com"));
        assert_eq!(project.github_url, None);
    }

    #[test]
    fn test_project_row_without_optional_links_deserializes() {
        let row = json!({
            "id": "5f8b1f5e-4f9d-4f09-9c9d-0c84b3c1a111",
            "title": "Internal Tool",
            "description": "Not public",
            "technologies": [],
            "image_url": "https://cdn.example.com/tool.png",
            "order": 0,
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-01T10:00:00Z"
        });

        let project: Project = serde_json::from_value(row).unwrap();
        assert_eq!(project.demo_url, None);
        assert_eq!(project.github_url, None);
    }

    #[test]
    fn test_sorted_for_display_orders_by_display_order() {
        let sorted = Project::sorted_for_display(vec![
            project("third", 30),
            project("first", 1),
            project("second", 2),
        ]);
        let titles: Vec<&str> = sorted.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_sorted_for_display_keeps_fetched_order_for_ties() {
        let sorted = Project::sorted_for_display(vec![
            project("a", 1),
            project("b", 1),
            project("c", 0),
        ]);
        let titles: Vec<&str> = sorted.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["c", "a", "b"]);
    }

    #[test]
    fn test_about_row_with_empty_fields_deserializes() {
        let row = json!({
            "id": "0a4b1f5e-4f9d-4f09-9c9d-0c84b3c1a222",
            "bio": "I build things for the web.",
            "skills": [],
            "experience": "",
            "education": "",
            "updated_at": "2024-06-01T08:00:00+00:00"
        });

        let about: AboutInfo = serde_json::from_value(row).unwrap();
        assert_eq!(about.bio, "I build things for the web.");
        assert!(about.skills.is_empty());
        assert!(about.experience.is_empty());
        assert!(about.education.is_empty());
    }

    #[test]
    fn test_contact_message_serializes_to_insert_payload() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "Do you take contracts?".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Collaboration",
                "message": "Do you take contracts?"
            })
        );
    }
}
