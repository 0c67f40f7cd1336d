//! Click flows against a modes file on disk

use tempfile::tempdir;
use zenmodes_app::{
    Contact, FileModesStore, ModesFile, PolicyStore, PrioritySendersController,
    StaticPeopleDirectory, ZenMode,
};
use zenmodes_core::{ConversationScope, OptionKey, SenderScope, SendersCategory, ZenPolicy};

fn sample_file() -> ModesFile {
    ModesFile {
        modes: vec![ZenMode::new(
            "bedtime",
            "Bedtime",
            ZenPolicy {
                calls: SenderScope::Starred,
                messages: SenderScope::Anyone,
                conversations: ConversationScope::Anyone,
                repeat_callers: true,
            },
        )],
        people: StaticPeopleDirectory {
            starred: vec![Contact::named("Ada")],
            contacts_count: 3,
            all_conversations: 4,
            important_conversations: 1,
        },
    }
}

#[test]
fn test_messages_clicks_persist_across_reopen() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("modes.toml");
    let mut store = FileModesStore::create(&path, sample_file()).unwrap();

    let mut controller =
        PrioritySendersController::new(SendersCategory::Messages, store.people().clone());
    controller
        .update_state(&store.policy("bedtime").unwrap())
        .unwrap();

    // Anyone -> starred contacts drops conversations
    controller
        .on_option_clicked(&mut store, "bedtime", OptionKey::Starred)
        .unwrap();
    // Then add priority conversations alongside
    controller
        .on_option_clicked(&mut store, "bedtime", OptionKey::ImportantConversations)
        .unwrap();

    let reopened = FileModesStore::open(&path).unwrap();
    let policy = reopened.policy("bedtime").unwrap();
    assert_eq!(policy.messages, SenderScope::Starred);
    assert_eq!(policy.conversations, ConversationScope::Important);
    assert_eq!(policy.calls, SenderScope::Starred);
    assert!(policy.repeat_callers);
}

#[test]
fn test_calls_click_leaves_messages_untouched_on_disk() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("modes.toml");
    let mut store = FileModesStore::create(&path, sample_file()).unwrap();

    let mut controller =
        PrioritySendersController::new(SendersCategory::Calls, store.people().clone());
    controller
        .update_state(&store.policy("bedtime").unwrap())
        .unwrap();
    controller
        .on_option_clicked(&mut store, "bedtime", OptionKey::None)
        .unwrap();

    let policy = FileModesStore::open(&path)
        .unwrap()
        .policy("bedtime")
        .unwrap();
    assert_eq!(policy.calls, SenderScope::None);
    assert_eq!(policy.messages, SenderScope::Anyone);
    assert_eq!(policy.conversations, ConversationScope::Anyone);
}

#[test]
fn test_click_on_unknown_mode_fails() {
    let temp = tempdir().unwrap();
    let mut store = FileModesStore::create(temp.path().join("modes.toml"), sample_file()).unwrap();

    let mut controller =
        PrioritySendersController::new(SendersCategory::Messages, store.people().clone());
    let err = controller
        .on_option_clicked(&mut store, "focus", OptionKey::Any)
        .unwrap_err();
    assert!(err.is_recoverable());
}

#[test]
fn test_clicks_from_two_stores_both_persist() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("modes.toml");
    FileModesStore::create(&path, sample_file()).unwrap();

    let mut calls_store = FileModesStore::open(&path).unwrap();
    let mut messages_store = FileModesStore::open(&path).unwrap();

    let mut calls =
        PrioritySendersController::new(SendersCategory::Calls, calls_store.people().clone());
    calls
        .update_state(&calls_store.policy("bedtime").unwrap())
        .unwrap();
    let mut messages =
        PrioritySendersController::new(SendersCategory::Messages, messages_store.people().clone());
    messages
        .update_state(&messages_store.policy("bedtime").unwrap())
        .unwrap();

    calls
        .on_option_clicked(&mut calls_store, "bedtime", OptionKey::Contacts)
        .unwrap();
    messages
        .on_option_clicked(&mut messages_store, "bedtime", OptionKey::None)
        .unwrap();

    let policy = FileModesStore::open(&path)
        .unwrap()
        .policy("bedtime")
        .unwrap();
    assert_eq!(policy.calls, SenderScope::Contacts);
    assert_eq!(policy.messages, SenderScope::None);
    assert_eq!(policy.conversations, ConversationScope::None);
}
