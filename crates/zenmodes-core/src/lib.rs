//! # zenmodes-core - Core Domain Types
//!
//! Foundation crate for zen-modes. Provides the sender policy types, the
//! option keys of the calls/messages senders screens, the reconciler that
//! turns option clicks into policy changes, error handling and logging.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Policy Types (`policy`)
//! - [`SenderScope`] - Anyone / Contacts / Starred / None (plus `Unset`)
//! - [`ConversationScope`] - Anyone / Important / None (plus `Unset`)
//! - [`PolicyState`] - The (senders, conversations) pair a screen edits
//! - [`SendersCategory`] - Calls or messages
//! - [`ZenPolicy`] - The persisted per-mode policy
//!
//! ### Options (`option_key`)
//! - [`OptionKey`] - Selectable options and their stable string ids
//!
//! ### Reconciliation (`reconciler`)
//! - [`desired_end_state()`] - Target state implied by a click
//! - [`settings_to_save()`] - Policy fields to persist after a click
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use zenmodes_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod option_key;
pub mod policy;
pub mod prelude;
pub mod reconciler;

pub use error::{Error, Result, ResultExt};
pub use option_key::OptionKey;
pub use policy::{ConversationScope, PolicyState, SenderScope, SendersCategory, ZenPolicy};
pub use reconciler::{desired_end_state, settings_to_save};
