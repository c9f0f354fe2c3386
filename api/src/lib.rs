//! Remote data access for the portfolio site.
//!
//! Everything the frontends know about the hosted Supabase project lives
//! here: the build-time connection settings ([`Config`]), the typed records
//! behind each page ([`models`]), the REST client that moves them over the
//! wire ([`Client`]), and the error type all of it reports ([`Error`]).
//!
//! The client speaks plain PostgREST. Reads go through
//! [`Client::fetch_all`] and [`Client::fetch_one_or_absent`]; the only
//! write is [`Client::insert`], used by the contact form.

mod client;
mod config;
mod error;
pub mod models;

pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use models::{AboutInfo, ContactMessage, Project};
