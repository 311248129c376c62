//! Card for one activity: details, availability, roster, and signup form.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use contract::Activity;
use leptos::prelude::*;

use crate::components::participant_list::ParticipantList;
use crate::components::register_form::RegisterForm;

/// Callbacks a card uses to report user intent to the page. Every callback
/// receives the activity name the card was rendered for.
#[derive(Clone, Copy)]
pub struct CardActions {
    pub open: Callback<String>,
    pub cancel: Callback<String>,
    pub submit: Callback<String>,
    /// `(activity, email)` of the participant to remove.
    pub remove: Callback<(String, String)>,
}

fn register_button_label(full: bool) -> &'static str {
    if full { "Activity Full" } else { "Register Student" }
}

#[component]
pub fn ActivityCard(name: String, activity: Activity, actions: CardActions) -> impl IntoView {
    let full = activity.is_full();
    let availability = activity.availability_label();
    let Activity { description, schedule, participants, .. } = activity;
    let open_name = name.clone();

    view! {
        <div class="activity-card">
            <h4>{name.clone()}</h4>
            <p>{description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-container">
                <ParticipantList activity=name.clone() participants=participants on_remove=actions.remove/>
            </div>
            <div class="activity-actions">
                <button
                    class="register-btn"
                    disabled=full
                    on:click=move |_| actions.open.run(open_name.clone())
                >
                    {register_button_label(full)}
                </button>
                <RegisterForm activity=name actions=actions/>
            </div>
        </div>
    }
}
