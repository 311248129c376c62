//! Activity board page: listing, per-card registration, and status banner.
//!
//! ARCHITECTURE
//! ============
//! The page backs [`BoardSink`] with the two context signals and hands
//! each card a [`CardActions`] bundle. Cards never query the DOM; every
//! callback receives the activity name (and email) it was rendered for.
//! Operations run as independent `spawn_local` tasks.

use leptos::prelude::*;

use crate::components::activity_card::{ActivityCard, CardActions};
use crate::components::message_banner::MessageBanner;
use crate::net::api::HttpApi;
use crate::state::board::{BoardState, LoadStatus};
use crate::state::message::{MessageState, Notice};
use crate::util::board_actions::{BoardSink, LOAD_FAILED_MESSAGE, refresh, register, unregister};

/// [`BoardSink`] over the page's context signals.
#[derive(Clone, Copy)]
struct SignalSink {
    board: RwSignal<BoardState>,
    messages: RwSignal<MessageState>,
}

impl BoardSink for SignalSink {
    fn update_board(&self, f: impl FnOnce(&mut BoardState)) {
        self.board.update(f);
    }

    fn notify(&self, notice: Notice) {
        let now = now_ms();
        if let Some(seq) = self.messages.try_update(|m| m.show(notice, now)) {
            schedule_expiry(self.messages, seq);
        }
    }
}

/// Milliseconds on the browser clock; constant on the server, where no
/// message is ever shown.
fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Clear message `seq` once its display window has passed, unless a newer
/// message has replaced it by then.
fn schedule_expiry(messages: RwSignal<MessageState>, seq: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::message::{ExpiryStep, MESSAGE_TTL};

        let mut wait = MESSAGE_TTL;
        loop {
            gloo_timers::future::sleep(wait).await;
            let now = now_ms();
            match messages.try_with_untracked(|m| m.expiry_step(seq, now)) {
                None | Some(ExpiryStep::Stop) => break,
                Some(ExpiryStep::Expire) => {
                    messages.update(|m| {
                        m.expire(seq, now);
                    });
                    break;
                }
                // Timer fired early relative to Date.now(); wait out the rest.
                Some(ExpiryStep::Wait(rest)) => wait = rest,
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (messages, seq);
    }
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let messages = expect_context::<RwSignal<MessageState>>();
    let sink = SignalSink { board, messages };

    // Initial load; effects only run in the browser.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            refresh(&HttpApi, &sink).await;
        });
    });

    let actions = CardActions {
        open: Callback::new(move |name: String| {
            board.update(|b| {
                b.open_form(&name);
            });
        }),
        cancel: Callback::new(move |name: String| board.update(|b| b.cancel_form(&name))),
        submit: Callback::new(move |name: String| {
            let email = board.with_untracked(|b| b.draft(&name).to_owned());
            leptos::task::spawn_local(async move {
                register(&HttpApi, &sink, &name, &email).await;
            });
        }),
        remove: Callback::new(move |(name, email): (String, String)| {
            leptos::task::spawn_local(async move {
                unregister(&HttpApi, &sink, &name, &email).await;
            });
        }),
    };

    // Re-render the card list only on load results, not on form edits.
    let listing = Memo::new(move |_| board.with(|b| (b.status, b.render_seq)));

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <div id="activities-list">
                    {move || {
                        let (status, _) = listing.get();
                        match status {
                            LoadStatus::Loading => view! { <p>"Loading activities..."</p> }.into_any(),
                            LoadStatus::Failed => view! { <p>{LOAD_FAILED_MESSAGE}</p> }.into_any(),
                            LoadStatus::Loaded => board
                                .with_untracked(|b| b.activities.clone())
                                .into_entries()
                                .into_iter()
                                .map(|(name, activity)| {
                                    view! { <ActivityCard name=name activity=activity actions=actions/> }
                                })
                                .collect::<Vec<_>>()
                                .into_any(),
                        }
                    }}
                </div>
            </section>
            <MessageBanner/>
        </main>
    }
}
