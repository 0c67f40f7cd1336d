//! Option identifiers shown on a senders screen

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::policy::SendersCategory;

/// One selectable option on a calls or messages senders screen.
///
/// The conversation options only exist on the messages screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum OptionKey {
    #[serde(rename = "senders_starred_contacts")]
    Starred,
    #[serde(rename = "senders_contacts")]
    Contacts,
    #[serde(rename = "conversations_any")]
    AnyConversations,
    #[serde(rename = "conversations_important")]
    ImportantConversations,
    #[serde(rename = "senders_anyone")]
    Any,
    #[serde(rename = "senders_none")]
    None,
}

const CALLS_OPTIONS: &[OptionKey] = &[
    OptionKey::Starred,
    OptionKey::Contacts,
    OptionKey::Any,
    OptionKey::None,
];

const MESSAGES_OPTIONS: &[OptionKey] = &[
    OptionKey::Starred,
    OptionKey::Contacts,
    OptionKey::AnyConversations,
    OptionKey::ImportantConversations,
    OptionKey::Any,
    OptionKey::None,
];

impl OptionKey {
    /// Stable string id of this option
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Any => "senders_anyone",
            OptionKey::Contacts => "senders_contacts",
            OptionKey::Starred => "senders_starred_contacts",
            OptionKey::None => "senders_none",
            OptionKey::ImportantConversations => "conversations_important",
            OptionKey::AnyConversations => "conversations_any",
        }
    }

    /// Options offered for `category`, in display order
    pub fn for_category(category: SendersCategory) -> &'static [OptionKey] {
        match category {
            SendersCategory::Calls => CALLS_OPTIONS,
            SendersCategory::Messages => MESSAGES_OPTIONS,
        }
    }

    /// Whether this option edits the conversations axis only
    pub fn is_conversation_option(self) -> bool {
        matches!(
            self,
            OptionKey::ImportantConversations | OptionKey::AnyConversations
        )
    }

    /// Whether this option is a specific contacts-based restriction
    pub fn is_contacts_option(self) -> bool {
        matches!(self, OptionKey::Starred | OptionKey::Contacts)
    }

    pub fn is_valid_for(self, category: SendersCategory) -> bool {
        Self::for_category(category).contains(&self)
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptionKey {
    type Err = Error;

    /// Accepts the stable ids plus short aliases used on the command line
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "senders_anyone" | "any" | "anyone" => Ok(OptionKey::Any),
            "senders_contacts" | "contacts" => Ok(OptionKey::Contacts),
            "senders_starred_contacts" | "starred" => Ok(OptionKey::Starred),
            "senders_none" | "none" => Ok(OptionKey::None),
            "conversations_important" | "important" => Ok(OptionKey::ImportantConversations),
            "conversations_any" | "any_conversations" => Ok(OptionKey::AnyConversations),
            _ => Err(Error::unknown_option_key(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_order_per_category() {
        assert_eq!(
            OptionKey::for_category(SendersCategory::Calls),
            &[
                OptionKey::Starred,
                OptionKey::Contacts,
                OptionKey::Any,
                OptionKey::None
            ]
        );
        let messages = OptionKey::for_category(SendersCategory::Messages);
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[2], OptionKey::AnyConversations);
        assert_eq!(messages[3], OptionKey::ImportantConversations);
    }

    #[test]
    fn test_conversation_options_invalid_for_calls() {
        assert!(!OptionKey::ImportantConversations.is_valid_for(SendersCategory::Calls));
        assert!(!OptionKey::AnyConversations.is_valid_for(SendersCategory::Calls));
        assert!(OptionKey::ImportantConversations.is_valid_for(SendersCategory::Messages));
        assert!(OptionKey::None.is_valid_for(SendersCategory::Calls));
    }

    #[test]
    fn test_parse_ids_and_aliases() {
        for key in OptionKey::for_category(SendersCategory::Messages) {
            assert_eq!(key.as_str().parse::<OptionKey>().unwrap(), *key);
        }
        assert_eq!("important".parse::<OptionKey>().unwrap(), OptionKey::ImportantConversations);
        assert_eq!("anyone".parse::<OptionKey>().unwrap(), OptionKey::Any);

        let err = "senders_everyone".parse::<OptionKey>().unwrap_err();
        assert!(err.to_string().contains("senders_everyone"));
    }

    #[test]
    fn test_serde_uses_stable_ids() {
        let json = serde_json::to_string(&OptionKey::Starred).unwrap();
        assert_eq!(json, "\"senders_starred_contacts\"");
        let key: OptionKey = serde_json::from_str("\"conversations_any\"").unwrap();
        assert_eq!(key, OptionKey::AnyConversations);
    }
}
