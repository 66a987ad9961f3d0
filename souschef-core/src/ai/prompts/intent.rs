//! Prompt for the binary recipe-intent classifier.
//!
//! The message to classify is sent verbatim as the user message; the rules
//! live in the system prompt.

/// Prompt name for logging and test routing.
pub const INTENT_PROMPT_NAME: &str = "classify_intent";

/// The only answer that counts as in-domain.
pub const IN_DOMAIN_TOKEN: &str = "RECIPE";

/// The answer for everything else.
pub const OFF_TOPIC_TOKEN: &str = "OTHER";

/// Render the classifier's system prompt.
///
/// With a dish name the question becomes whether the message asks to refine
/// that dish; without one, whether it asks for a recipe at all.
pub fn render_intent_system_prompt(dish_name: Option<&str>) -> String {
    let question = match dish_name {
        Some(dish) => format!(
            "The user is currently looking at a recipe for \"{dish}\". Decide whether their \
             message is a request about cooking or changing this recipe: ingredient preparation, \
             cooking technique, flavor, nutrition, timing, difficulty, portion size, ingredient \
             substitution or presentation."
        ),
        None => "Decide whether the user's message is a request to cook something or to get a \
                 recipe, for example naming ingredients they have, a dish they want to make, a \
                 cuisine, or a time limit for a meal."
            .to_string(),
    };

    format!(
        "You are an intent classifier for a cooking assistant. {question}\n\n\
         Topics such as weather, news, politics, entertainment, personal life, work, study or \
         technology are not cooking requests.\n\n\
         Answer with exactly one word: {in_domain} if it is a cooking request, {off_topic} \
         otherwise. Do not add punctuation or explanation.",
        question = question,
        in_domain = IN_DOMAIN_TOKEN,
        off_topic = OFF_TOPIC_TOKEN,
    )
}
