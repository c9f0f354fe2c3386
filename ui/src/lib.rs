//! This crate contains all shared UI for the portfolio site.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;

    pub mod brands {
        pub use dioxus_free_icons::icons::fa_brands_icons::*;
    }
}

pub mod nav;
pub use nav::Page;

mod remote;
pub use remote::{
    error_message, render_remote, use_remote, EmptyNotice, ErrorNotice, RemoteState, Spinner,
};

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;
