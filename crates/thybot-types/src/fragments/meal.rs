//! Per-dish prompt for the meal analysis.

use thybot_core::{generic::GenericMessage, template::IntoPrompt};

use crate::food::FoodRecord;

/// Asks for a thyroid-focused verdict on one dish.
///
/// With a nutrition record the prompt carries its nutrients and impact tag;
/// without one the model is told to reason from general knowledge.
#[derive(Debug, Clone, Copy)]
pub struct MealItemFragment<'a> {
    thyroid_status: &'a str,
    dish: &'a str,
    record: Option<&'a FoodRecord>,
}

impl<'a> MealItemFragment<'a> {
    pub fn new(thyroid_status: &'a str, dish: &'a str, record: Option<&'a FoodRecord>) -> Self {
        Self {
            thyroid_status,
            dish,
            record,
        }
    }
}

const VERDICT_REQUEST: &str = "Briefly explain if this food is generally beneficial, neutral, \
     or should be consumed with caution for their condition and why. Provide one simple \
     suggestion for a healthy pairing or alternative.";

impl IntoPrompt for MealItemFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let text = match self.record {
            Some(record) => format!(
                "A patient with '{}' is eating '{}'. Its known thyroid impact is '{}' and its \
                 nutrients are: {}. {VERDICT_REQUEST}",
                self.thyroid_status,
                self.dish,
                record.thyroid_impact,
                record.nutrients_line()
            ),
            None => format!(
                "A patient with '{}' is eating '{}'. This dish is not in our nutrition table, \
                 so rely on general nutrition knowledge about its usual ingredients. \
                 {VERDICT_REQUEST}",
                self.thyroid_status, self.dish
            ),
        };

        vec![GenericMessage::user(text)]
    }
}
