//! zenmodes-app - Senders screen state and policy persistence for zen-modes
//!
//! Wires the reconciler from `zenmodes-core` into a screen controller, backs it
//! with policy stores (in-memory and a TOML modes file), and loads the
//! project configuration.

pub mod config;
pub mod controller;
pub mod modes_file;
pub mod people;
pub mod store;
pub mod summary;

pub use controller::{selected_options, PrioritySendersController, SenderOption};
pub use modes_file::{FileModesStore, ModesFile};
pub use people::{Contact, PeopleDirectory, StaticPeopleDirectory};
pub use store::{InMemoryPolicyStore, PolicyStore, ZenMode};
pub use summary::{
    calls_setting_summary, messages_setting_summary, option_summary, people_summary,
    setting_summary, OptionSummary, PeopleSummary, SenderGroup, SettingSummary,
};
