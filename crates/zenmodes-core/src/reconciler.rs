//! Sender policy reconciliation
//!
//! Turns a click on a senders screen option into the policy change to save.
//! Both functions are pure: the current state is passed in and the caller
//! writes the returned delta back to its policy store.
//!
//! Checking and unchecking mostly sets or clears the matching field. The two
//! axes (contacts-based senders and conversations) only interact when leaving
//! the "anyone" senders state:
//! - clicking a conversations option while senders is `Anyone` also narrows
//!   senders to `None`
//! - clicking starred or contacts while senders is `Anyone` also resets
//!   conversations to `None`
//!
//! Switching between non-`Anyone` options never touches the other axis.

use crate::error::{Error, Result};
use crate::option_key::OptionKey;
use crate::policy::{ConversationScope, PolicyState, SenderScope, SendersCategory};

/// Target state implied by toggling `key` to `checked`, ignoring the current policy.
///
/// `Unset` fields mean "no change prescribed". For calls, conversations are
/// always `Unset`.
///
/// # Errors
/// [`Error::InvalidOptionKey`] when the key prescribes nothing for the given
/// category, e.g. a conversations option on the calls screen.
pub fn desired_end_state(
    key: OptionKey,
    checked: bool,
    category: SendersCategory,
) -> Result<PolicyState> {
    let mut end = PolicyState::UNCHANGED;

    if !checked {
        // Unchecking any senders option falls back to nobody.
        // "Unchecking" None is still None.
        if matches!(
            key,
            OptionKey::Starred | OptionKey::Contacts | OptionKey::Any | OptionKey::None
        ) {
            end.senders = SenderScope::None;
        }

        if category.is_messages()
            && matches!(
                key,
                OptionKey::ImportantConversations
                    | OptionKey::AnyConversations
                    | OptionKey::Any
                    | OptionKey::None
            )
        {
            end.conversations = ConversationScope::None;
        }
    } else {
        end.senders = match key {
            OptionKey::Starred => SenderScope::Starred,
            OptionKey::Contacts => SenderScope::Contacts,
            OptionKey::Any => SenderScope::Anyone,
            OptionKey::None => SenderScope::None,
            OptionKey::ImportantConversations | OptionKey::AnyConversations => {
                SenderScope::Unset
            }
        };

        if category.is_messages() {
            end.conversations = match key {
                OptionKey::ImportantConversations => ConversationScope::Important,
                OptionKey::AnyConversations | OptionKey::Any => ConversationScope::Anyone,
                OptionKey::None => ConversationScope::None,
                OptionKey::Starred | OptionKey::Contacts => ConversationScope::Unset,
            };
        }
    }

    if end.is_unchanged() {
        return Err(Error::invalid_option_key(key, category));
    }

    Ok(end)
}

/// Policy fields to save after a click on `key`.
///
/// Each returned field is either the new value or `Unset` for "leave alone".
/// Calls options are radio buttons, so `checked` is treated as `true` there.
///
/// # Errors
/// Propagates [`Error::InvalidOptionKey`] from [`desired_end_state`].
pub fn settings_to_save(
    key: OptionKey,
    checked: bool,
    current: PolicyState,
    category: SendersCategory,
) -> Result<PolicyState> {
    let checked = checked || !category.is_messages();
    let end = desired_end_state(key, checked, category)?;

    let mut to_save = PolicyState::UNCHANGED;
    if !end.senders.is_unset() && end.senders != current.senders {
        to_save.senders = end.senders;
    }

    if category.is_messages() {
        if !end.conversations.is_unset() && end.conversations != current.conversations {
            to_save.conversations = end.conversations;
        }

        // Anyone already covers every conversation; touching a conversations
        // option from there narrows senders so the choice takes effect.
        if key.is_conversation_option() && current.senders == SenderScope::Anyone {
            to_save.senders = SenderScope::None;
        }

        // Only when leaving Anyone. Switching between starred and contacts keeps
        // whatever conversations choice is already visible.
        if key.is_contacts_option() && current.senders == SenderScope::Anyone {
            to_save.conversations = ConversationScope::None;
        }
    }

    tracing::trace!(
        "{} {} on {} ({}) -> save {}",
        if checked { "check" } else { "uncheck" },
        key,
        category,
        current,
        to_save
    );

    Ok(to_save)
}
