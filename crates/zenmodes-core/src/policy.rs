//! Sender policy domain types
//!
//! Defines:
//! - [`SenderScope`] - who may reach the user through calls or messages
//! - [`ConversationScope`] - which conversations may bypass the mode
//! - [`PolicyState`] - the (senders, conversations) pair one screen edits
//! - [`SendersCategory`] - whether a screen edits calls or messages
//! - [`ZenPolicy`] - the persisted per-mode policy

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Who may bypass a mode through calls or messages.
///
/// From most to least permissive: `Anyone`, `Contacts`, `Starred`, `None`.
/// `Unset` means "no explicit value" and, in a delta, "leave alone".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderScope {
    #[default]
    Unset,
    Anyone,
    Contacts,
    Starred,
    None,
}

impl SenderScope {
    pub fn is_unset(self) -> bool {
        self == SenderScope::Unset
    }
}

impl std::fmt::Display for SenderScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderScope::Unset => write!(f, "unset"),
            SenderScope::Anyone => write!(f, "anyone"),
            SenderScope::Contacts => write!(f, "contacts"),
            SenderScope::Starred => write!(f, "starred"),
            SenderScope::None => write!(f, "none"),
        }
    }
}

/// Which conversations may bypass a mode, independent of [`SenderScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationScope {
    #[default]
    Unset,
    Anyone,
    Important,
    None,
}

impl ConversationScope {
    pub fn is_unset(self) -> bool {
        self == ConversationScope::Unset
    }
}

impl std::fmt::Display for ConversationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversationScope::Unset => write!(f, "unset"),
            ConversationScope::Anyone => write!(f, "anyone"),
            ConversationScope::Important => write!(f, "important"),
            ConversationScope::None => write!(f, "none"),
        }
    }
}

/// Which interruption channel a senders screen edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SendersCategory {
    Calls,
    Messages,
}

impl SendersCategory {
    pub fn is_messages(self) -> bool {
        self == SendersCategory::Messages
    }
}

impl std::fmt::Display for SendersCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendersCategory::Calls => write!(f, "calls"),
            SendersCategory::Messages => write!(f, "messages"),
        }
    }
}

impl std::str::FromStr for SendersCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "calls" => Ok(SendersCategory::Calls),
            "messages" => Ok(SendersCategory::Messages),
            _ => Err(Error::config(format!("Unknown senders category: {}", s))),
        }
    }
}

/// The (senders, conversations) pair edited by one senders screen.
///
/// Used both as a snapshot of the current policy and as a delta, where an
/// `Unset` field means "no change".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct PolicyState {
    #[serde(default)]
    pub senders: SenderScope,
    #[serde(default)]
    pub conversations: ConversationScope,
}

impl PolicyState {
    pub const UNCHANGED: PolicyState = PolicyState {
        senders: SenderScope::Unset,
        conversations: ConversationScope::Unset,
    };

    pub fn new(senders: SenderScope, conversations: ConversationScope) -> Self {
        Self {
            senders,
            conversations,
        }
    }

    /// True when neither field carries a value
    pub fn is_unchanged(&self) -> bool {
        self.senders.is_unset() && self.conversations.is_unset()
    }

    /// Overlay the non-`Unset` fields of `delta` onto this state
    pub fn apply(self, delta: PolicyState) -> PolicyState {
        PolicyState {
            senders: if delta.senders.is_unset() {
                self.senders
            } else {
                delta.senders
            },
            conversations: if delta.conversations.is_unset() {
                self.conversations
            } else {
                delta.conversations
            },
        }
    }
}

impl std::fmt::Display for PolicyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "senders={}, conversations={}",
            self.senders, self.conversations
        )
    }
}

/// Interruption policy persisted for a single mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ZenPolicy {
    /// Who may call through
    #[serde(default)]
    pub calls: SenderScope,

    /// Who may message through
    #[serde(default)]
    pub messages: SenderScope,

    /// Which conversations may message through
    #[serde(default)]
    pub conversations: ConversationScope,

    /// Whether a second call from the same person within a short window is let through
    #[serde(default)]
    pub repeat_callers: bool,
}

impl ZenPolicy {
    /// Project this policy onto the state edited by `category`'s screen.
    ///
    /// Calls screens never see conversations, so the field is `Unset` there.
    pub fn senders_state(&self, category: SendersCategory) -> PolicyState {
        match category {
            SendersCategory::Calls => PolicyState::new(self.calls, ConversationScope::Unset),
            SendersCategory::Messages => PolicyState::new(self.messages, self.conversations),
        }
    }

    /// Build a new policy from this one plus a senders delta.
    ///
    /// `Unset` delta fields leave the policy untouched; conversations are
    /// ignored for calls.
    pub fn with_senders_state(&self, category: SendersCategory, delta: PolicyState) -> ZenPolicy {
        let mut next = *self;
        if !delta.senders.is_unset() {
            match category {
                SendersCategory::Calls => next.calls = delta.senders,
                SendersCategory::Messages => next.messages = delta.senders,
            }
        }
        if category.is_messages() && !delta.conversations.is_unset() {
            next.conversations = delta.conversations;
        }
        next
    }
}
