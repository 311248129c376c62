//! Roster of registered emails, each with a removal control.

use leptos::prelude::*;

fn remove_label(email: &str) -> String {
    format!("Unregister {email}")
}

/// Participant rows in server order, or a placeholder for an empty roster.
#[component]
pub fn ParticipantList(
    activity: String,
    participants: Vec<String>,
    on_remove: Callback<(String, String)>,
) -> impl IntoView {
    if participants.is_empty() {
        return view! {
            <p>
                <em>"No participants yet"</em>
            </p>
        }
        .into_any();
    }

    let rows = participants
        .into_iter()
        .map(|email| {
            let label = remove_label(&email);
            let target = (activity.clone(), email.clone());
            view! {
                <li>
                    <span class="participant-email">{email}</span>
                    <button
                        class="delete-btn"
                        title=label.clone()
                        aria-label=label
                        on:click=move |_| on_remove.run(target.clone())
                    >
                        "❌"
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="participants-section">
            <h5>"Participants:"</h5>
            <ul class="participants-list">{rows}</ul>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_label_names_the_participant() {
        assert_eq!(remove_label("a@mergington.edu"), "Unregister a@mergington.edu");
    }
}
