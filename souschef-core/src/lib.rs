pub mod agent;
pub mod ai;
pub mod error;
pub mod image;
pub mod recipe;
pub mod requirements;
pub mod types;

pub use agent::RecipeAgent;
pub use error::{FormatError, RecipeError, StatusClass};
pub use image::{load_image, validate_image, MAX_FILE_SIZE};
pub use recipe::{InstructionStep, NutritionalInfo, Recipe, RecipeIngredient};
pub use requirements::{validate_requirements, RawRequirements, Requirements};
pub use types::{
    ConversationRole, ConversationTurn, OffTopicReminder, OptimizationRequest, OptimizeOutcome,
    ReminderKind,
};

/// Unique identifier for this build, generated at compile time.
/// Reported by the health endpoint.
pub const BUILD_ID: &str = env!("BUILD_ID");
