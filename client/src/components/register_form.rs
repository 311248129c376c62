//! Inline email form under an activity card.
//!
//! Visibility and input text live in `BoardState`, keyed by activity name;
//! this component only renders them and forwards clicks.

use leptos::prelude::*;

use crate::components::activity_card::CardActions;
use crate::state::board::{BoardState, FormState};

#[component]
pub fn RegisterForm(activity: String, actions: CardActions) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let active = {
        let name = activity.clone();
        Memo::new(move |_| board.with(|b| b.form_state(&name) == FormState::Active))
    };
    let draft = {
        let name = activity.clone();
        Memo::new(move |_| board.with(|b| b.draft(&name).to_owned()))
    };

    // Focus the input whenever this form becomes the active one.
    Effect::new(move || {
        if active.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let input_name = activity.clone();
    let enter_name = activity.clone();
    let submit_name = activity.clone();
    let cancel_name = activity;

    view! {
        <div class="register-form" class:active=move || active.get()>
            <input
                node_ref=input_ref
                type="email"
                class="email-input"
                placeholder="student-email@mergington.edu"
                required=true
                prop:value=move || draft.get()
                on:input=move |ev| {
                    board.update(|b| b.set_draft(&input_name, event_target_value(&ev)));
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        actions.submit.run(enter_name.clone());
                    }
                }
            />
            <div class="register-form-buttons">
                <button class="submit-register-btn" on:click=move |_| actions.submit.run(submit_name.clone())>
                    "Sign Up"
                </button>
                <button class="cancel-btn" on:click=move |_| actions.cancel.run(cancel_name.clone())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
