//! The closed set of pages and their document titles.
//!
//! Navigation is in-memory: the shell holds the current [`Page`] in a
//! signal and swaps views when it changes. Nothing here touches the URL.

/// Document title used when an identifier falls outside the page set.
pub const DEFAULT_TITLE: &str = "Portfolio";

/// A page the shell can display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Projects,
    About,
    Contact,
}

impl Page {
    /// Every page, in navbar display order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Projects, Page::About, Page::Contact];

    /// Stable lowercase identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    /// Look an identifier back up; anything outside the set is `None`.
    pub fn from_slug(slug: &str) -> Option<Page> {
        match slug {
            "home" => Some(Page::Home),
            "projects" => Some(Page::Projects),
            "about" => Some(Page::About),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    /// Label shown on the navigation link.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Document title shown while this page is active.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Portfolio - Home",
            Page::Projects => "Portfolio - Projects",
            Page::About => "Portfolio - About",
            Page::Contact => "Portfolio - Contact",
        }
    }
}

/// Document title for an arbitrary page identifier.
///
/// Identifiers outside the page set degrade to [`DEFAULT_TITLE`] rather
/// than failing.
pub fn title_for(slug: &str) -> &'static str {
    Page::from_slug(slug).map(Page::title).unwrap_or(DEFAULT_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_maps_to_its_title() {
        assert_eq!(title_for("home"), "Portfolio - Home");
        assert_eq!(title_for("projects"), "Portfolio - Projects");
        assert_eq!(title_for("about"), "Portfolio - About");
        assert_eq!(title_for("contact"), "Portfolio - Contact");
    }

    #[test]
    fn test_unknown_identifiers_fall_back_to_the_default_title() {
        assert_eq!(title_for("blog"), DEFAULT_TITLE);
        assert_eq!(title_for(""), DEFAULT_TITLE);
        assert_eq!(title_for("Home"), DEFAULT_TITLE);
    }

    #[test]
    fn test_slugs_round_trip_through_from_slug() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
    }

    #[test]
    fn test_the_default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
        assert_eq!(Page::from_slug("blog").unwrap_or_default(), Page::Home);
    }
}
