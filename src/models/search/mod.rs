// Search module
// Active search selection used to narrow the visible events

use serde::{Deserialize, Serialize};

use crate::models::event::Event;

/// Search selection. An event matches when its group label or its user
/// equals the corresponding field here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchToken {
    pub group_label: Option<String>,
    pub user: Option<String>,
}

impl SearchToken {
    pub fn group(group_label: impl Into<String>) -> Self {
        Self {
            group_label: Some(group_label.into()),
            user: None,
        }
    }

    pub fn user(user: impl Into<String>) -> Self {
        Self {
            group_label: None,
            user: Some(user.into()),
        }
    }

    /// Token selecting everything that shares the given event's group or user
    pub fn from_event(event: &Event) -> Self {
        Self {
            group_label: event.group_label.clone(),
            user: event.user.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.group_label.as_deref().map_or(true, str::is_empty)
            && self.user.as_deref().map_or(true, str::is_empty)
    }

    pub fn matches(&self, event: &Event) -> bool {
        let group_hit = matches!(
            (&self.group_label, &event.group_label),
            (Some(wanted), Some(actual)) if wanted == actual
        );
        let user_hit = matches!(
            (&self.user, &event.user),
            (Some(wanted), Some(actual)) if wanted == actual
        );
        group_hit || user_hit
    }
}
