//! Priority senders screen controller
//!
//! Drives one "who can interrupt" screen, for either calls or messages:
//! - which options exist, which are checked and which are visible
//! - turning an option click into a policy change via the reconciler
//! - the summary line under each option
//!
//! Calls options behave as radio buttons. Messages options are checkboxes
//! because contacts and conversations are independent axes that can both be
//! on at once.

use std::collections::BTreeSet;

use zenmodes_core::prelude::*;
use zenmodes_core::{
    settings_to_save, ConversationScope, OptionKey, PolicyState, SenderScope, SendersCategory,
    ZenPolicy,
};

use crate::people::PeopleDirectory;
use crate::store::PolicyStore;
use crate::summary::{
    option_summary, people_summary, setting_summary, OptionSummary, PeopleSummary, SettingSummary,
};

/// One option row on the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderOption {
    pub key: OptionKey,
    pub checked: bool,
    pub visible: bool,
    /// Checkbox (toggles) vs radio button (always selects)
    pub is_checkbox: bool,
    pub summary: OptionSummary,
}

impl SenderOption {
    fn new(key: OptionKey, category: SendersCategory) -> Self {
        Self {
            key,
            checked: false,
            // "Any conversations" is confusing to set up from this screen, so it
            // only shows once a policy actually selects it.
            visible: key != OptionKey::AnyConversations,
            is_checkbox: category.is_messages(),
            summary: OptionSummary::Empty,
        }
    }
}

/// Options that should be checked for `state` on a `category` screen.
///
/// # Errors
/// - [`Error::UnexpectedSenderScope`] for a calls state without senders
/// - [`Error::EmptySelection`] for a messages state that selects nothing
pub fn selected_options(
    state: PolicyState,
    category: SendersCategory,
) -> Result<BTreeSet<OptionKey>> {
    let mut selected = BTreeSet::new();

    match category {
        SendersCategory::Messages => {
            if state.senders == SenderScope::Anyone {
                selected.insert(OptionKey::Any);
            } else if state.senders == SenderScope::None
                && state.conversations == ConversationScope::None
            {
                selected.insert(OptionKey::None);
            } else {
                match state.senders {
                    SenderScope::Starred => {
                        selected.insert(OptionKey::Starred);
                    }
                    SenderScope::Contacts => {
                        selected.insert(OptionKey::Contacts);
                    }
                    _ => {}
                }
                match state.conversations {
                    ConversationScope::Important => {
                        selected.insert(OptionKey::ImportantConversations);
                    }
                    ConversationScope::Anyone => {
                        selected.insert(OptionKey::AnyConversations);
                    }
                    _ => {}
                }
            }
        }
        SendersCategory::Calls => {
            let key = match state.senders {
                SenderScope::Anyone => OptionKey::Any,
                SenderScope::Contacts => OptionKey::Contacts,
                SenderScope::Starred => OptionKey::Starred,
                SenderScope::None => OptionKey::None,
                SenderScope::Unset => {
                    return Err(Error::UnexpectedSenderScope {
                        scope: state.senders,
                    })
                }
            };
            selected.insert(key);
        }
    }

    if selected.is_empty() {
        return Err(Error::EmptySelection);
    }
    Ok(selected)
}

/// Controller for a calls or messages priority senders screen
#[derive(Debug)]
pub struct PrioritySendersController<D> {
    category: SendersCategory,
    directory: D,
    options: Vec<SenderOption>,
    num_all_conversations: usize,
    num_important_conversations: usize,
}

impl<D: PeopleDirectory> PrioritySendersController<D> {
    pub fn new(category: SendersCategory, directory: D) -> Self {
        let options = OptionKey::for_category(category)
            .iter()
            .map(|key| SenderOption::new(*key, category))
            .collect();

        let mut controller = Self {
            category,
            directory,
            options,
            num_all_conversations: 0,
            num_important_conversations: 0,
        };
        controller.on_resume();
        controller
    }

    pub fn category(&self) -> SendersCategory {
        self.category
    }

    /// The senders screen is offered for every mode
    pub fn is_available(&self) -> bool {
        true
    }

    /// All options in display order, including hidden ones
    pub fn options(&self) -> &[SenderOption] {
        &self.options
    }

    pub fn visible_options(&self) -> impl Iterator<Item = &SenderOption> {
        self.options.iter().filter(|option| option.visible)
    }

    pub fn option(&self, key: OptionKey) -> Option<&SenderOption> {
        self.options.iter().find(|option| option.key == key)
    }

    pub fn checked_options(&self) -> BTreeSet<OptionKey> {
        self.options
            .iter()
            .filter(|option| option.checked)
            .map(|option| option.key)
            .collect()
    }

    /// Summary of who can interrupt under `policy`
    pub fn summary(&self, policy: &ZenPolicy) -> PeopleSummary {
        people_summary(policy)
    }

    /// Summary of this screen's setting under `policy`, e.g. for a link to it
    pub fn setting_summary(&self, policy: &ZenPolicy) -> SettingSummary {
        setting_summary(policy, self.category)
    }

    /// Sync checked/visible flags and summaries with `policy`
    pub fn update_state(&mut self, policy: &ZenPolicy) -> Result<()> {
        if self.category.is_messages() {
            self.update_channel_counts();
        }

        let selected = selected_options(policy.senders_state(self.category), self.category)?;
        self.set_selected_options(&selected);
        self.update_summaries();
        Ok(())
    }

    /// Refresh counts and summaries when the screen comes back into view
    pub fn on_resume(&mut self) {
        if self.category.is_messages() {
            self.update_channel_counts();
        }
        self.update_summaries();
    }

    /// Handle a click on `key` for `mode_id`.
    ///
    /// Reads the mode's policy from `store`, saves the reconciled policy when
    /// anything changed and refreshes the screen. Returns the saved delta,
    /// where `Unset` fields were left alone.
    pub fn on_option_clicked<S>(
        &mut self,
        store: &mut S,
        mode_id: &str,
        key: OptionKey,
    ) -> Result<PolicyState>
    where
        S: PolicyStore + ?Sized,
    {
        let option = self
            .option(key)
            .ok_or_else(|| Error::invalid_option_key(key, self.category))?;
        let checked = if option.is_checkbox {
            !option.checked
        } else {
            true
        };

        let previous = store.policy(mode_id)?;
        let current = previous.senders_state(self.category);
        let delta = settings_to_save(key, checked, current, self.category)?;

        let policy = if delta.is_unchanged() {
            debug!("{} click on {} for {}: nothing to save", self.category, key, mode_id);
            previous
        } else {
            let next = previous.with_senders_state(self.category, delta);
            store.set_policy(mode_id, next)?;
            debug!(
                "{} click on {} for {}: saved {}",
                self.category, key, mode_id, delta
            );
            next
        };

        self.update_state(&policy)?;
        Ok(delta)
    }

    fn set_selected_options(&mut self, keys: &BTreeSet<OptionKey>) {
        for option in &mut self.options {
            option.checked = keys.contains(&option.key);
            // Selected options always show. "Any conversations" then stays
            // visible so it can be toggled back and forth.
            if option.checked {
                option.visible = true;
            }
        }
    }

    fn update_channel_counts(&mut self) {
        self.num_all_conversations = self.directory.all_conversations_count();
        self.num_important_conversations = self.directory.important_conversations_count();
    }

    fn update_summaries(&mut self) {
        for option in &mut self.options {
            option.summary = option_summary(
                option.key,
                self.category,
                &self.directory,
                self.num_all_conversations,
                self.num_important_conversations,
            );
        }
    }
}
