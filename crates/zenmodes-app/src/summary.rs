//! Summaries for senders options and whole policies
//!
//! These are structured values, not localized text. [`std::fmt::Display`]
//! gives a plain English rendering for the command line.

use serde::Serialize;
use zenmodes_core::{ConversationScope, OptionKey, SenderScope, SendersCategory, ZenPolicy};

use crate::people::PeopleDirectory;

/// Shown in place of a starred contact without a display name
pub const UNNAMED_CONTACT: &str = "(No name)";

/// Starred contacts named before the rest are counted as "others"
const NAMED_STARRED: usize = 2;

/// Summary line under a single senders option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionSummary {
    /// Starred contacts, naming all of them up to three, otherwise the first two
    StarredContacts { count: usize, names: Vec<String> },
    /// Number of contacts
    Contacts { count: usize },
    /// Number of conversations matching the option
    Conversations { count: usize },
    /// Everyone can call / message
    AllSenders { category: SendersCategory },
    /// No summary line
    Empty,
}

impl std::fmt::Display for OptionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionSummary::StarredContacts { count, names } => match names.as_slice() {
                [] => write!(f, "None"),
                [first] => write!(f, "{}", first),
                [first, second] if *count > 2 => {
                    write!(f, "{}, {}, and {} others", first, second, count - 2)
                }
                [first, second] => write!(f, "{} and {}", first, second),
                [first, second, third, ..] => write!(f, "{}, {}, and {}", first, second, third),
            },
            OptionSummary::Contacts { count } => match count {
                0 => write!(f, "None"),
                1 => write!(f, "1 contact"),
                n => write!(f, "{} contacts", n),
            },
            OptionSummary::Conversations { count } => match count {
                1 => write!(f, "1 conversation"),
                n => write!(f, "{} conversations", n),
            },
            OptionSummary::AllSenders { category } => match category {
                SendersCategory::Calls => write!(f, "All calls can reach you"),
                SendersCategory::Messages => write!(f, "All messages can reach you"),
            },
            OptionSummary::Empty => Ok(()),
        }
    }
}

/// Summary for the option `key` on a `category` screen
pub fn option_summary(
    key: OptionKey,
    category: SendersCategory,
    directory: &impl PeopleDirectory,
    num_all_conversations: usize,
    num_important_conversations: usize,
) -> OptionSummary {
    match key {
        OptionKey::Starred => starred_contacts_summary(directory),
        OptionKey::Contacts => OptionSummary::Contacts {
            count: directory.all_contacts_count(),
        },
        OptionKey::AnyConversations => conversations_summary(num_all_conversations),
        OptionKey::ImportantConversations => conversations_summary(num_important_conversations),
        OptionKey::Any => OptionSummary::AllSenders { category },
        OptionKey::None => OptionSummary::Empty,
    }
}

fn starred_contacts_summary(directory: &impl PeopleDirectory) -> OptionSummary {
    let starred = directory.starred_contacts();
    // Three fit on one line; beyond that two are named and the rest counted
    let named = if starred.len() == NAMED_STARRED + 1 {
        starred.len()
    } else {
        NAMED_STARRED
    };
    let names = starred
        .iter()
        .take(named)
        .map(|contact| match contact.display_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNNAMED_CONTACT.to_string(),
        })
        .collect();
    OptionSummary::StarredContacts {
        count: starred.len(),
        names,
    }
}

fn conversations_summary(count: usize) -> OptionSummary {
    // Zero conversations shows no line at all
    if count == 0 {
        OptionSummary::Empty
    } else {
        OptionSummary::Conversations { count }
    }
}

/// Who can interrupt a mode, across calls, messages and conversations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeopleSummary {
    /// Everyone can call, message and start conversations
    All,
    /// Nobody can interrupt
    None,
    /// Nobody, except repeat callers
    RepeatCallersOnly,
    /// Anything in between
    Some,
}

impl std::fmt::Display for PeopleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeopleSummary::All => write!(f, "All people can interrupt"),
            PeopleSummary::None => write!(f, "No one can interrupt"),
            PeopleSummary::RepeatCallersOnly => write!(f, "Repeat callers can interrupt"),
            PeopleSummary::Some => write!(f, "Some people can interrupt"),
        }
    }
}

/// Summarize who may interrupt under `policy`.
///
/// Unset scopes let nobody through.
pub fn people_summary(policy: &ZenPolicy) -> PeopleSummary {
    let allowed = |scope: SenderScope| {
        if scope.is_unset() {
            SenderScope::None
        } else {
            scope
        }
    };
    let calls = allowed(policy.calls);
    let messages = allowed(policy.messages);
    let conversations = if policy.conversations.is_unset() {
        ConversationScope::None
    } else {
        policy.conversations
    };

    if calls == SenderScope::Anyone
        && messages == SenderScope::Anyone
        && conversations == ConversationScope::Anyone
    {
        PeopleSummary::All
    } else if calls == SenderScope::None
        && messages == SenderScope::None
        && conversations == ConversationScope::None
    {
        if policy.repeat_callers {
            PeopleSummary::RepeatCallersOnly
        } else {
            PeopleSummary::None
        }
    } else {
        PeopleSummary::Some
    }
}

/// A group of senders let through by a calls or messages setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderGroup {
    Anyone,
    Contacts,
    Starred,
    RepeatCallers,
    ImportantConversations,
    AllConversations,
}

impl SenderGroup {
    /// Text for this group, capitalized when it leads the summary
    fn label(self, category: SendersCategory, first: bool) -> &'static str {
        match (self, first) {
            (SenderGroup::Anyone, true) => "Anyone",
            (SenderGroup::Contacts, true) => "Contacts",
            (SenderGroup::Starred, true) => "Starred contacts",
            (SenderGroup::RepeatCallers, true) => "Repeat callers",
            (SenderGroup::ImportantConversations, true) => "Priority conversations",
            (SenderGroup::AllConversations, true) => "All conversations",
            (SenderGroup::Anyone, false) if category == SendersCategory::Calls => "all callers",
            (SenderGroup::Anyone, false) => "anyone",
            (SenderGroup::Contacts, false) => "contacts",
            (SenderGroup::Starred, false) => "starred contacts",
            (SenderGroup::RepeatCallers, false) => "repeat callers",
            (SenderGroup::ImportantConversations, false) => "priority conversations",
            (SenderGroup::AllConversations, false) => "all conversations",
        }
    }
}

/// Summary of one category setting, as shown on the mode's page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingSummary {
    pub category: SendersCategory,
    /// At most two groups, in display order. Empty means nobody.
    pub groups: Vec<SenderGroup>,
}

impl std::fmt::Display for SettingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.groups.as_slice() {
            [] => write!(f, "None"),
            groups => {
                let labels: Vec<&str> = groups
                    .iter()
                    .enumerate()
                    .map(|(i, group)| group.label(self.category, i == 0))
                    .collect();
                write!(f, "{}", labels.join(" and "))
            }
        }
    }
}

fn sender_group(scope: SenderScope) -> Option<SenderGroup> {
    match scope {
        SenderScope::Anyone => Some(SenderGroup::Anyone),
        SenderScope::Contacts => Some(SenderGroup::Contacts),
        SenderScope::Starred => Some(SenderGroup::Starred),
        SenderScope::None | SenderScope::Unset => None,
    }
}

/// Calls setting summary: call senders, then repeat callers.
///
/// Repeat callers are left out when anyone can call already.
pub fn calls_setting_summary(policy: &ZenPolicy) -> SettingSummary {
    let mut groups: Vec<SenderGroup> = sender_group(policy.calls).into_iter().collect();
    if policy.repeat_callers && policy.calls != SenderScope::Anyone {
        groups.push(SenderGroup::RepeatCallers);
    }
    SettingSummary {
        category: SendersCategory::Calls,
        groups,
    }
}

/// Messages setting summary: message senders, then conversations.
///
/// Anyone covers every conversation too, so it stands alone.
pub fn messages_setting_summary(policy: &ZenPolicy) -> SettingSummary {
    let groups = if policy.messages == SenderScope::Anyone {
        vec![SenderGroup::Anyone]
    } else {
        let conversations = match policy.conversations {
            ConversationScope::Important => Some(SenderGroup::ImportantConversations),
            ConversationScope::Anyone => Some(SenderGroup::AllConversations),
            ConversationScope::None | ConversationScope::Unset => None,
        };
        sender_group(policy.messages)
            .into_iter()
            .chain(conversations)
            .collect()
    };
    SettingSummary {
        category: SendersCategory::Messages,
        groups,
    }
}

pub fn setting_summary(policy: &ZenPolicy, category: SendersCategory) -> SettingSummary {
    match category {
        SendersCategory::Calls => calls_setting_summary(policy),
        SendersCategory::Messages => messages_setting_summary(policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::people::{Contact, StaticPeopleDirectory};

    fn directory(starred: Vec<Contact>) -> StaticPeopleDirectory {
        StaticPeopleDirectory {
            starred,
            contacts_count: 7,
            all_conversations: 4,
            important_conversations: 0,
        }
    }

    fn starred_summary(names: &[&str]) -> OptionSummary {
        let people = directory(names.iter().map(|name| Contact::named(*name)).collect());
        option_summary(OptionKey::Starred, SendersCategory::Calls, &people, 0, 0)
    }

    #[test]
    fn test_starred_summary_by_count() {
        assert_eq!(starred_summary(&["Ada"]).to_string(), "Ada");
        assert_eq!(starred_summary(&["Ada", "Grace"]).to_string(), "Ada and Grace");
        assert_eq!(
            starred_summary(&["Ada", "Grace", "Linus"]).to_string(),
            "Ada, Grace, and Linus"
        );
        assert_eq!(
            starred_summary(&["Ada", "Grace", "Linus", "Ken"]).to_string(),
            "Ada, Grace, and 2 others"
        );
    }

    #[test]
    fn test_starred_summary_names_two_beyond_three() {
        let people = directory(vec![
            Contact::named("Ada"),
            Contact::unnamed(),
            Contact::named("Grace"),
            Contact::named("Linus"),
            Contact::named("Ken"),
        ]);

        let summary = option_summary(OptionKey::Starred, SendersCategory::Calls, &people, 0, 0);
        assert_eq!(
            summary,
            OptionSummary::StarredContacts {
                count: 5,
                names: vec!["Ada".to_string(), UNNAMED_CONTACT.to_string()],
            }
        );
        assert_eq!(summary.to_string(), "Ada, (No name), and 3 others");
    }

    #[test]
    fn test_starred_summary_empty_name_uses_placeholder() {
        let people = directory(vec![Contact {
            display_name: Some(String::new()),
        }]);
        let summary = option_summary(OptionKey::Starred, SendersCategory::Messages, &people, 0, 0);
        assert_eq!(summary.to_string(), UNNAMED_CONTACT);

        let nobody = directory(vec![]);
        let summary = option_summary(OptionKey::Starred, SendersCategory::Messages, &nobody, 0, 0);
        assert_eq!(summary.to_string(), "None");
    }

    #[test]
    fn test_contacts_and_conversation_summaries() {
        let people = directory(vec![]);

        let summary = option_summary(OptionKey::Contacts, SendersCategory::Messages, &people, 4, 0);
        assert_eq!(summary, OptionSummary::Contacts { count: 7 });
        assert_eq!(summary.to_string(), "7 contacts");

        let summary =
            option_summary(OptionKey::AnyConversations, SendersCategory::Messages, &people, 4, 0);
        assert_eq!(summary, OptionSummary::Conversations { count: 4 });

        let summary = option_summary(
            OptionKey::ImportantConversations,
            SendersCategory::Messages,
            &people,
            4,
            0,
        );
        assert_eq!(summary, OptionSummary::Empty);
    }

    #[test]
    fn test_any_and_none_summaries() {
        let people = directory(vec![]);
        let summary = option_summary(OptionKey::Any, SendersCategory::Calls, &people, 0, 0);
        assert_eq!(summary.to_string(), "All calls can reach you");

        let summary = option_summary(OptionKey::None, SendersCategory::Calls, &people, 0, 0);
        assert_eq!(summary, OptionSummary::Empty);
        assert_eq!(summary.to_string(), "");
    }

    #[test]
    fn test_people_summary_all() {
        let policy = ZenPolicy {
            calls: SenderScope::Anyone,
            messages: SenderScope::Anyone,
            conversations: ConversationScope::Anyone,
            repeat_callers: false,
        };
        assert_eq!(people_summary(&policy), PeopleSummary::All);
    }

    #[test]
    fn test_people_summary_none_and_repeat_callers() {
        let mut policy = ZenPolicy {
            calls: SenderScope::None,
            messages: SenderScope::None,
            conversations: ConversationScope::None,
            repeat_callers: false,
        };
        assert_eq!(people_summary(&policy), PeopleSummary::None);

        policy.repeat_callers = true;
        assert_eq!(people_summary(&policy), PeopleSummary::RepeatCallersOnly);

        // Unset scopes count as nobody
        assert_eq!(people_summary(&ZenPolicy::default()), PeopleSummary::None);
    }

    #[test]
    fn test_people_summary_some() {
        let policy = ZenPolicy {
            calls: SenderScope::Anyone,
            messages: SenderScope::Anyone,
            conversations: ConversationScope::Important,
            repeat_callers: true,
        };
        assert_eq!(people_summary(&policy), PeopleSummary::Some);
    }

    // ─────────────────────────────────────────────────────────
    // Category settings
    // ─────────────────────────────────────────────────────────

    fn messages_policy(messages: SenderScope, conversations: ConversationScope) -> ZenPolicy {
        ZenPolicy {
            calls: SenderScope::None,
            messages,
            conversations,
            repeat_callers: false,
        }
    }

    fn calls_policy(calls: SenderScope, repeat_callers: bool) -> ZenPolicy {
        ZenPolicy {
            calls,
            messages: SenderScope::None,
            conversations: ConversationScope::None,
            repeat_callers,
        }
    }

    #[test]
    fn test_messages_setting_anyone_hides_conversations() {
        for conversations in [
            ConversationScope::None,
            ConversationScope::Important,
            ConversationScope::Anyone,
        ] {
            let policy = messages_policy(SenderScope::Anyone, conversations);
            let summary = messages_setting_summary(&policy);
            assert_eq!(summary.groups, vec![SenderGroup::Anyone]);
            assert_eq!(summary.to_string(), "Anyone");
        }
    }

    #[test]
    fn test_messages_setting_conversations_only() {
        let summary = messages_setting_summary(&messages_policy(
            SenderScope::None,
            ConversationScope::Important,
        ));
        assert_eq!(summary.to_string(), "Priority conversations");

        let summary = messages_setting_summary(&messages_policy(
            SenderScope::None,
            ConversationScope::Anyone,
        ));
        assert_eq!(summary.to_string(), "All conversations");
    }

    #[test]
    fn test_messages_setting_contacts_and_conversations() {
        let summary = messages_setting_summary(&messages_policy(
            SenderScope::Starred,
            ConversationScope::Important,
        ));
        assert_eq!(summary.to_string(), "Starred contacts and priority conversations");

        let summary = messages_setting_summary(&messages_policy(
            SenderScope::Starred,
            ConversationScope::Anyone,
        ));
        assert_eq!(summary.to_string(), "Starred contacts and all conversations");

        let policy = messages_policy(SenderScope::None, ConversationScope::None);
        let summary = messages_setting_summary(&policy);
        assert!(summary.groups.is_empty());
        assert_eq!(summary.to_string(), "None");
    }

    #[test]
    fn test_calls_setting_with_repeat_callers() {
        let summary = calls_setting_summary(&calls_policy(SenderScope::Contacts, true));
        assert_eq!(summary.to_string(), "Contacts and repeat callers");

        let summary = calls_setting_summary(&calls_policy(SenderScope::None, true));
        assert_eq!(summary.to_string(), "Repeat callers");

        let summary = calls_setting_summary(&calls_policy(SenderScope::Starred, false));
        assert_eq!(summary.to_string(), "Starred contacts");

        let summary = calls_setting_summary(&calls_policy(SenderScope::None, false));
        assert_eq!(summary.to_string(), "None");
    }

    #[test]
    fn test_calls_setting_anyone_covers_repeat_callers() {
        let summary = calls_setting_summary(&calls_policy(SenderScope::Anyone, true));
        assert_eq!(summary.groups, vec![SenderGroup::Anyone]);
        assert_eq!(
            setting_summary(&calls_policy(SenderScope::Anyone, true), SendersCategory::Calls),
            summary
        );
    }
}
