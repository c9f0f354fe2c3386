//! Shared lifecycle for views backed by a remote fetch.
//!
//! Every data-backed view goes through the same three states: a fetch is
//! in flight, it failed with a displayable description, or it delivered a
//! value. [`use_remote`] starts the fetch on mount and tracks the state in
//! a signal; [`render_remote`] renders the first two states uniformly and
//! hands the value to the view only once it is ready.

use std::fmt::Display;
use std::future::Future;

use dioxus::prelude::*;

/// State of one view's remote fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    /// The fetch is still in flight.
    Loading,
    /// The fetch failed; the payload is ready to display as-is.
    Failed(String),
    /// The fetch delivered a value.
    Ready(T),
}

impl<T> RemoteState<T> {
    /// Settle a finished fetch into its terminal state.
    ///
    /// `fallback` stands in when the error describes itself with an empty
    /// string, so the failed state always has something to show.
    pub fn from_result<E: Display>(result: Result<T, E>, fallback: &str) -> Self {
        match result {
            Ok(value) => RemoteState::Ready(value),
            Err(err) => RemoteState::Failed(error_message(&err, fallback)),
        }
    }
}

/// Displayable text for an error, substituting `fallback` when the error
/// has no description of its own.
pub fn error_message(err: &impl Display, fallback: &str) -> String {
    let description = err.to_string();
    if description.trim().is_empty() {
        fallback.to_string()
    } else {
        description
    }
}

/// Start a fetch when the view mounts and expose its state as a signal.
///
/// The fetch runs once per mount. A client is built from the compiled-in
/// settings and handed to `fetch`; any error, including a missing config,
/// settles the state as [`RemoteState::Failed`] rather than escaping.
pub fn use_remote<T, F, Fut>(fallback: &'static str, fetch: F) -> Signal<RemoteState<T>>
where
    T: 'static,
    F: Fn(api::Client) -> Fut + 'static,
    Fut: Future<Output = Result<T, api::Error>> + 'static,
{
    let mut state = use_signal(|| RemoteState::Loading);
    let _loader = use_resource(move || {
        let request = api::Client::from_env().map(|client| fetch(client));
        async move {
            let settled = match request {
                Ok(pending) => pending.await,
                Err(err) => Err(err),
            };
            if let Err(err) = &settled {
                tracing::error!("Failed to fetch remote data: {}", err);
            }
            state.set(RemoteState::from_result(settled, fallback));
        }
    });
    state
}

/// Render a remote-backed view: spinner while loading, notice on failure,
/// `render` once the value is ready.
pub fn render_remote<T>(state: RemoteState<T>, render: impl FnOnce(&T) -> Element) -> Element {
    match state {
        RemoteState::Loading => rsx! {
            Spinner {}
        },
        RemoteState::Failed(message) => rsx! {
            ErrorNotice { message }
        },
        RemoteState::Ready(value) => render(&value),
    }
}

/// Full-page indeterminate progress indicator.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "page page--center",
            span { class: "spinner", role: "status", aria_label: "Loading" }
        }
    }
}

/// Full-page fetch failure notice.
#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div { class: "page",
            div { class: "notice notice--error", role: "alert", "{message}" }
        }
    }
}

/// Full-page notice for content that is not there yet.
#[component]
pub fn EmptyNotice(message: String) -> Element {
    rsx! {
        div { class: "page page--center",
            p { class: "notice notice--empty", "{message}" }
        }
    }
}
