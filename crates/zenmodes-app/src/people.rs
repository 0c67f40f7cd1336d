//! Contacts and conversations data used for option summaries

use serde::{Deserialize, Serialize};

/// A starred contact as reported by the contacts provider
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Contact {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Contact {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
        }
    }

    pub fn unnamed() -> Self {
        Self { display_name: None }
    }
}

/// Source of the people counts shown under each senders option
pub trait PeopleDirectory {
    fn starred_contacts(&self) -> Vec<Contact>;

    fn all_contacts_count(&self) -> usize;

    fn all_conversations_count(&self) -> usize;

    fn important_conversations_count(&self) -> usize;
}

/// Fixed snapshot of people data, e.g. the `[people]` table of a modes file
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct StaticPeopleDirectory {
    #[serde(default)]
    pub starred: Vec<Contact>,

    #[serde(default)]
    pub contacts_count: usize,

    #[serde(default)]
    pub all_conversations: usize,

    #[serde(default)]
    pub important_conversations: usize,
}

impl PeopleDirectory for StaticPeopleDirectory {
    fn starred_contacts(&self) -> Vec<Contact> {
        self.starred.clone()
    }

    fn all_contacts_count(&self) -> usize {
        self.contacts_count
    }

    fn all_conversations_count(&self) -> usize {
        self.all_conversations
    }

    fn important_conversations_count(&self) -> usize {
        self.important_conversations
    }
}

impl<T: PeopleDirectory + ?Sized> PeopleDirectory for &T {
    fn starred_contacts(&self) -> Vec<Contact> {
        (**self).starred_contacts()
    }

    fn all_contacts_count(&self) -> usize {
        (**self).all_contacts_count()
    }

    fn all_conversations_count(&self) -> usize {
        (**self).all_conversations_count()
    }

    fn important_conversations_count(&self) -> usize {
        (**self).important_conversations_count()
    }
}
