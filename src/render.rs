//! Plain text and JSON views of modes and senders screens

use serde::Serialize;
use zenmodes_app::{
    calls_setting_summary, messages_setting_summary, people_summary, OptionSummary,
    PeopleDirectory, PeopleSummary, PrioritySendersController, SettingSummary, ZenMode,
};
use zenmodes_core::{OptionKey, SendersCategory};

/// One row of `zenmodes list`
#[derive(Debug, Serialize)]
pub struct ModeRow {
    pub id: String,
    pub name: String,
    pub people: PeopleSummary,
    pub calls: SettingSummary,
    pub messages: SettingSummary,
}

pub fn mode_list(modes: &[ZenMode]) -> Vec<ModeRow> {
    modes
        .iter()
        .map(|mode| ModeRow {
            id: mode.id.clone(),
            name: mode.display_name().to_string(),
            people: people_summary(&mode.policy),
            calls: calls_setting_summary(&mode.policy),
            messages: messages_setting_summary(&mode.policy),
        })
        .collect()
}

pub fn render_mode_list(modes: &[ZenMode]) -> String {
    if modes.is_empty() {
        return "No modes configured\n".to_string();
    }

    let width = modes.iter().map(|m| m.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in mode_list(modes) {
        out.push_str(&format!(
            "{:<width$}  {}  ({})\n",
            row.id,
            row.name,
            row.people,
            width = width
        ));
        out.push_str(&format!("  calls: {}\n", row.calls));
        out.push_str(&format!("  messages: {}\n", row.messages));
    }
    out
}

/// A visible option on a senders screen
#[derive(Debug, Serialize)]
pub struct OptionRow {
    pub key: OptionKey,
    pub checked: bool,
    pub checkbox: bool,
    pub summary: OptionSummary,
}

/// A senders screen as shown to the user
#[derive(Debug, Serialize)]
pub struct ScreenView {
    pub mode: String,
    pub category: SendersCategory,
    pub setting: SettingSummary,
    pub people: PeopleSummary,
    pub options: Vec<OptionRow>,
}

pub fn screen_view<D: PeopleDirectory>(
    mode: &ZenMode,
    controller: &PrioritySendersController<D>,
) -> ScreenView {
    ScreenView {
        mode: mode.display_name().to_string(),
        category: controller.category(),
        setting: controller.setting_summary(&mode.policy),
        people: controller.summary(&mode.policy),
        options: controller
            .visible_options()
            .map(|option| OptionRow {
                key: option.key,
                checked: option.checked,
                checkbox: option.is_checkbox,
                summary: option.summary.clone(),
            })
            .collect(),
    }
}

fn option_title(key: OptionKey) -> &'static str {
    match key {
        OptionKey::Starred => "Starred contacts",
        OptionKey::Contacts => "Contacts",
        OptionKey::AnyConversations => "All conversations",
        OptionKey::ImportantConversations => "Priority conversations",
        OptionKey::Any => "Anyone",
        OptionKey::None => "None",
    }
}

pub fn render_screen(view: &ScreenView) -> String {
    let mut out = format!(
        "{} - {}: {} ({})\n",
        view.mode, view.category, view.setting, view.people
    );
    for row in &view.options {
        let marker = match (row.checkbox, row.checked) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            (false, true) => "(*)",
            (false, false) => "( )",
        };
        let summary = row.summary.to_string();
        if summary.is_empty() {
            out.push_str(&format!("  {} {}\n", marker, option_title(row.key)));
        } else {
            out.push_str(&format!(
                "  {} {} - {}\n",
                marker,
                option_title(row.key),
                summary
            ));
        }
    }
    out
}
