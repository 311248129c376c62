//! Status banner for operation results.

use leptos::prelude::*;

use crate::state::message::{MessageState, Notice};

fn banner_class(notice: Option<&Notice>) -> &'static str {
    match notice {
        Some(n) => n.kind.css_class(),
        None => "hidden",
    }
}

/// Single message area shared by every operation. Cleared by the expiry
/// timer the page starts when a message is shown.
#[component]
pub fn MessageBanner() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessageState>>();

    let class = move || messages.with(|m| banner_class(m.current.as_ref()));
    let text = move || messages.with(|m| m.current.as_ref().map(|n| n.text.clone()).unwrap_or_default());

    view! {
        <div id="message" class=class role="status">
            {text}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_class_hidden_without_message() {
        assert_eq!(banner_class(None), "hidden");
    }

    #[test]
    fn banner_class_follows_severity() {
        assert_eq!(banner_class(Some(&Notice::success("ok"))), "success");
        assert_eq!(banner_class(Some(&Notice::error("Please enter a valid email address"))), "error");
    }
}
