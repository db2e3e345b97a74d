//! Status badge

use std::fmt;

use comfy_table::Color;
use shared::{Record, StatusCode};

/// Label shown for soft-deleted rows, whatever their status
pub const DELETED_LABEL: &str = "Supprimé";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Muted,
    Warning,
    Danger,
    Disabled,
}

impl BadgeTone {
    pub fn color(self) -> Color {
        match self {
            BadgeTone::Success => Color::Green,
            BadgeTone::Muted => Color::Grey,
            BadgeTone::Warning => Color::Yellow,
            BadgeTone::Danger => Color::Red,
            BadgeTone::Disabled => Color::DarkGrey,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub text: String,
    pub tone: BadgeTone,
}

impl StatusBadge {
    pub fn for_record<E: Record>(entity: &E) -> Self {
        if entity.is_deleted() {
            return Self {
                text: DELETED_LABEL.to_string(),
                tone: BadgeTone::Disabled,
            };
        }

        let Some(status) = entity.status() else {
            return Self {
                text: "-".to_string(),
                tone: BadgeTone::Muted,
            };
        };

        let text = if status.label.trim().is_empty() {
            default_label(status.code).to_string()
        } else {
            status.label.clone()
        };
        Self {
            text,
            tone: tone_for(status.code),
        }
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn tone_for(code: StatusCode) -> BadgeTone {
    match code {
        StatusCode::Active => BadgeTone::Success,
        StatusCode::Inactive => BadgeTone::Muted,
        StatusCode::Pending => BadgeTone::Warning,
        StatusCode::Rejected => BadgeTone::Danger,
        StatusCode::Unknown => BadgeTone::Muted,
    }
}

fn default_label(code: StatusCode) -> &'static str {
    match code {
        StatusCode::Active => "Actif",
        StatusCode::Inactive => "Inactif",
        StatusCode::Pending => "En attente",
        StatusCode::Rejected => "Rejeté",
        StatusCode::Unknown => "Inconnu",
    }
}
