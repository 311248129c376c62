//! Activity listing state and the per-activity registration forms.
//!
//! DESIGN
//! ======
//! The active form is a single `Option<String>`, so "at most one form open"
//! holds by construction: opening a form replaces whichever was open.
//! Every successful load is a full render pass that rebuilds all forms in
//! the hidden state with empty inputs.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::HashMap;

use contract::ActivityMap;

/// Where the activity listing is in its fetch lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Initial fetch not finished yet.
    #[default]
    Loading,
    Loaded,
    /// The last fetch failed; the list shows the fallback text.
    Failed,
}

/// Visibility of one activity's registration form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Hidden,
    Active,
}

/// Listing state for the activity board page.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub status: LoadStatus,
    pub activities: ActivityMap,
    /// Name of the activity whose form is open, if any.
    pub active_form: Option<String>,
    /// Email input per activity. Missing entry means empty.
    pub drafts: HashMap<String, String>,
    /// Bumped on every load result so the list re-renders only when the
    /// data changes, not on form edits.
    pub render_seq: u64,
}

impl BoardState {
    /// Replace the whole collection with a fresh fetch result.
    pub fn replace_activities(&mut self, activities: ActivityMap) {
        self.status = LoadStatus::Loaded;
        self.activities = activities;
        self.reset_forms();
    }

    /// Drop the listing in favour of the fallback message.
    pub fn mark_load_failed(&mut self) {
        self.status = LoadStatus::Failed;
        self.activities = ActivityMap::new();
        self.reset_forms();
    }

    #[must_use]
    pub fn form_state(&self, activity: &str) -> FormState {
        if self.active_form.as_deref() == Some(activity) { FormState::Active } else { FormState::Hidden }
    }

    /// Show the form for `activity` and hide any other.
    ///
    /// Returns `false` (and changes nothing) for an unknown or full
    /// activity, whose register control is disabled.
    pub fn open_form(&mut self, activity: &str) -> bool {
        let Some(found) = self.activities.get(activity) else {
            return false;
        };
        if found.is_full() {
            return false;
        }
        self.active_form = Some(activity.to_owned());
        true
    }

    /// Hide the form and clear its input.
    pub fn cancel_form(&mut self, activity: &str) {
        if self.active_form.as_deref() == Some(activity) {
            self.active_form = None;
        }
        self.drafts.remove(activity);
    }

    /// A registration went through: same visible effect as cancelling.
    pub fn complete_registration(&mut self, activity: &str) {
        self.cancel_form(activity);
    }

    pub fn set_draft(&mut self, activity: &str, value: String) {
        self.drafts.insert(activity.to_owned(), value);
    }

    #[must_use]
    pub fn draft(&self, activity: &str) -> &str {
        self.drafts.get(activity).map_or("", String::as_str)
    }

    fn reset_forms(&mut self) {
        self.active_form = None;
        self.drafts.clear();
        self.render_seq += 1;
    }
}
