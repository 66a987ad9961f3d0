use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

/// Who said a conversation turn.
///
/// The requester is written as `"user"` on the wire; `"requester"` is
/// accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ConversationRole {
    #[serde(rename = "user", alias = "requester")]
    Requester,
    #[serde(rename = "assistant")]
    Assistant,
}

/// One earlier exchange, supplied by the caller on every optimize call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ConversationTurn {
    pub role: ConversationRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn requester(content: impl Into<String>) -> Self {
        Self {
            role: ConversationRole::Requester,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ConversationRole::Assistant,
            content: content.into(),
        }
    }
}

/// Input of a refinement call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OptimizationRequest {
    pub current_recipe: Recipe,
    pub user_request: String,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    #[default]
    OffTopic,
}

/// Returned instead of a recipe when the instruction is not about the recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OffTopicReminder {
    pub kind: ReminderKind,
    pub message: String,
}

impl OffTopicReminder {
    /// The reminder used when the request is deflected without asking the backend.
    pub fn for_dish(dish_name: &str) -> Self {
        Self {
            kind: ReminderKind::OffTopic,
            message: format!(
                "I can only help you refine the current recipe. Tell me how you would like to \
                 change \"{dish_name}\", for example adjusting the flavor, changing the cooking \
                 method, swapping ingredients or simplifying the steps."
            ),
        }
    }

    /// Keep a backend-written message, making sure it names the dish.
    pub fn with_message(message: String, dish_name: &str) -> Self {
        let message = if message.contains(dish_name) {
            message
        } else {
            format!("{} ({})", message.trim_end(), dish_name)
        };
        Self {
            kind: ReminderKind::OffTopic,
            message,
        }
    }
}

/// Terminal output of a refinement call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum OptimizeOutcome {
    OffTopic(OffTopicReminder),
    Recipe(Recipe),
}

impl OptimizeOutcome {
    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            OptimizeOutcome::Recipe(r) => Some(r),
            OptimizeOutcome::OffTopic(_) => None,
        }
    }

    pub fn is_off_topic(&self) -> bool {
        matches!(self, OptimizeOutcome::OffTopic(_))
    }
}
