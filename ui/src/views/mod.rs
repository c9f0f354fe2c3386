//! The four page views the shell can display.

mod home;
pub use home::HomeView;

mod projects;
pub use projects::ProjectsView;

mod about;
pub use about::AboutView;

mod contact;
pub use contact::ContactView;
