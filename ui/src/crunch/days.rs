//! The five days of the crunch and the static table describing each one.
//!
//! Everything the task card shows for a day (title, brief, action button,
//! result note, extra panel) comes from [`DAYS`]; the view never branches on
//! the weekday itself. Text fields are Fluent message IDs resolved through
//! [`crate::i18n::lookup`].

use std::fmt;

use super::engine::Action;

pub const DAY_COUNT: usize = 5;

/// Position in the five-day sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    pub const ALL: [Day; DAY_COUNT] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];
    pub const FIRST: Day = Day::Mon;
    pub const LAST: Day = Day::Fri;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following day, or `None` on Friday.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn descriptor(self) -> &'static DayDescriptor {
        &DAYS[self.index()]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().id)
    }
}

/// Visual flavour of the day's primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Success,
    Neutral,
}

impl ButtonVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Success => "button button--success",
            ButtonVariant::Neutral => "button button--neutral",
        }
    }
}

/// Extra content block rendered above or below the day's brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPanel {
    /// Ticket from the architect reporting the failure.
    Alert,
    /// Live power next to the budget.
    PowerBudget,
    /// FinFET layout visualiser.
    Layout,
    /// Big eye-height readout.
    EyeHeight,
}

/// Static, immutable description of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayDescriptor {
    pub day: Day,
    /// Short identifier shown in the stepper (`mon`..`fri`).
    pub id: &'static str,
    /// Stepper glyph.
    pub glyph: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub brief_key: Option<&'static str>,
    pub action: Action,
    pub action_label_key: &'static str,
    pub variant: ButtonVariant,
    /// Shown in place of the action button once the action has completed.
    pub result_title_key: Option<&'static str>,
    pub result_detail_key: Option<&'static str>,
    /// Whether the action button stays visible (disabled) after completion.
    pub keep_action_when_done: bool,
    pub panel: Option<DayPanel>,
}

pub static DAYS: [DayDescriptor; DAY_COUNT] = [
    DayDescriptor {
        day: Day::Mon,
        id: "mon",
        glyph: "⚠",
        title_key: "day-mon-title",
        description_key: "day-mon-desc",
        brief_key: None,
        action: Action::RunAnalysis,
        action_label_key: "action-mon",
        variant: ButtonVariant::Primary,
        result_title_key: Some("result-mon-title"),
        result_detail_key: None,
        keep_action_when_done: false,
        panel: Some(DayPanel::Alert),
    },
    DayDescriptor {
        day: Day::Tue,
        id: "tue",
        glyph: "⌕",
        title_key: "day-tue-title",
        description_key: "day-tue-desc",
        brief_key: Some("brief-tue"),
        action: Action::RunExtraction,
        action_label_key: "action-tue",
        variant: ButtonVariant::Neutral,
        result_title_key: Some("result-tue-title"),
        result_detail_key: Some("result-tue-detail"),
        keep_action_when_done: false,
        panel: None,
    },
    DayDescriptor {
        day: Day::Wed,
        id: "wed",
        glyph: "⚙",
        title_key: "day-wed-title",
        description_key: "day-wed-desc",
        brief_key: Some("brief-wed"),
        action: Action::ApplyCircuitFix,
        action_label_key: "action-wed",
        variant: ButtonVariant::Primary,
        result_title_key: None,
        result_detail_key: None,
        keep_action_when_done: true,
        panel: Some(DayPanel::PowerBudget),
    },
    DayDescriptor {
        day: Day::Thu,
        id: "thu",
        glyph: "▤",
        title_key: "day-thu-title",
        description_key: "day-thu-desc",
        brief_key: Some("brief-thu"),
        action: Action::ApplyLayoutEco,
        action_label_key: "action-thu",
        variant: ButtonVariant::Success,
        result_title_key: None,
        result_detail_key: None,
        keep_action_when_done: true,
        panel: Some(DayPanel::Layout),
    },
    DayDescriptor {
        day: Day::Fri,
        id: "fri",
        glyph: "✔",
        title_key: "day-fri-title",
        description_key: "day-fri-desc",
        brief_key: Some("brief-fri"),
        action: Action::SignOff,
        action_label_key: "action-fri",
        variant: ButtonVariant::Success,
        result_title_key: None,
        result_detail_key: None,
        keep_action_when_done: true,
        panel: Some(DayPanel::EyeHeight),
    },
];

impl DayDescriptor {
    /// Every Fluent message ID this descriptor refers to.
    pub fn message_keys(&self) -> Vec<&'static str> {
        let mut keys = vec![self.title_key, self.description_key, self.action_label_key];
        keys.extend(self.brief_key);
        keys.extend(self.result_title_key);
        keys.extend(self.result_detail_key);
        keys
    }
}
