//! Thyroid-focused analysis of a planned meal.
use thybot_core::{ThyBotClient, generic::GenericMessage, provider::ChatCompletionProvider};
use thybot_types::{fragments::MealItemFragment, food::FoodRecord, profile::PatientProfile};

use crate::{error::MealError, nutrition::NutritionTable};

/// Ordered list of unique dish names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlan {
    items: Vec<String>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dish` unless it is blank or already planned, ignoring case like
    /// [`NutritionTable::lookup`]. Returns whether it was added.
    pub fn add(&mut self, dish: &str) -> bool {
        let dish = dish.trim();
        let wanted = dish.to_lowercase();
        if dish.is_empty() || self.items.iter().any(|d| d.to_lowercase() == wanted) {
            return false;
        }
        self.items.push(dish.to_owned());
        true
    }

    /// Remove the item at `position` (0-based).
    pub fn remove(&mut self, position: usize) -> Option<String> {
        (position < self.items.len()).then(|| self.items.remove(position))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealItemAnalysis {
    pub dish: String,
    /// The table row, when the dish was found.
    pub record: Option<FoodRecord>,
    pub analysis: String,
    /// `true` if the model call failed and `analysis` describes the failure.
    pub failed: bool,
}

impl MealItemAnalysis {
    /// `**Thyroid Impact:** … | **Nutrients:** …` for dishes in the table.
    pub fn summary_line(&self) -> Option<String> {
        self.record.as_ref().map(|r| {
            format!(
                "**Thyroid Impact:** {} | **Nutrients:** {}",
                r.thyroid_impact,
                r.nutrients_line()
            )
        })
    }
}

/// Ask the model about every planned dish, in order.
///
/// Fails without calling the model when there is no profile or nothing is
/// planned. A failed model call only affects its own item.
pub async fn analyze_meal<B>(
    client: &ThyBotClient<B>,
    table: &NutritionTable,
    plan: &MealPlan,
    profile: Option<&PatientProfile>,
) -> Result<Vec<MealItemAnalysis>, MealError>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    let profile = profile.ok_or(MealError::MissingProfile)?;
    if plan.is_empty() {
        return Err(MealError::EmptyMeal);
    }

    let status = profile.thyroid_status.to_string();
    let mut results = Vec::with_capacity(plan.len());

    for dish in plan.items() {
        let record = table.lookup(dish);
        if record.is_none() {
            tracing::info!(dish = %dish, "dish not in nutrition table, using general knowledge");
        }

        let (analysis, failed) = match client
            .invoke(MealItemFragment::new(&status, dish, record))
            .await
        {
            Ok(text) => (text, false),
            Err(e) => {
                tracing::warn!(dish = %dish, error = %e, "meal item analysis failed");
                (format!("⚠️ Failed to analyse {dish}: {e}"), true)
            }
        };

        results.push(MealItemAnalysis {
            dish: dish.clone(),
            record: record.cloned(),
            analysis,
            failed,
        });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use thybot_types::profile::{Gender, ProfileForm};

    use super::*;
    use crate::test_support::ScriptedProvider;

    fn table() -> NutritionTable {
        NutritionTable::new(vec![FoodRecord {
            dish_name: "Palak paneer".into(),
            calories_kcal: 250.0,
            protein_g: 11.0,
            free_sugar_g: 1.5,
            thyroid_impact: "Goitrogenic – Limit in Hypothyroidism".into(),
        }])
    }

    fn profile() -> PatientProfile {
        PatientProfile::new(ProfileForm {
            name: "Asha".into(),
            age: 42,
            gender: Gender::Female,
            weight_kg: 68.0,
            height_cm: 160.0,
            tsh: 6.5,
            t3: 2.0,
            t4: 0.7,
        })
    }

    #[test]
    fn plan_keeps_unique_non_empty_items() {
        let mut plan = MealPlan::new();
        assert!(plan.add("Palak paneer"));
        assert!(!plan.add(" Palak paneer "));
        assert!(!plan.add("   "));
        assert!(plan.add("Curd rice"));
        assert_eq!(plan.remove(0).as_deref(), Some("Palak paneer"));
        assert_eq!(plan.remove(5), None);
        assert_eq!(plan.items(), ["Curd rice".to_string()]);
    }

    #[test]
    fn duplicates_differing_only_in_case_are_rejected() {
        let mut plan = MealPlan::new();
        assert!(plan.add("Egg curry"));
        assert!(!plan.add("egg curry"));
        assert!(!plan.add("  EGG CURRY"));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.items(), ["Egg curry".to_string()]);
    }

    #[tokio::test]
    async fn missing_profile_makes_no_model_call() {
        let client = ScriptedProvider::new().into_client();
        let mut plan = MealPlan::new();
        plan.add("Palak paneer");

        let err = analyze_meal(&client, &table(), &plan, None).await.unwrap_err();
        assert!(matches!(err, MealError::MissingProfile));
        assert_eq!(client.backend().calls(), 0);
    }

    #[tokio::test]
    async fn empty_plan_is_rejected() {
        let client = ScriptedProvider::new().into_client();
        let err = analyze_meal(&client, &table(), &MealPlan::new(), Some(&profile()))
            .await
            .unwrap_err();
        assert!(matches!(err, MealError::EmptyMeal));
    }

    #[tokio::test]
    async fn known_and_unknown_dishes_are_analysed_in_order() {
        let client = ScriptedProvider::new()
            .reply("Eat in moderation; pair with iodised salt.")
            .fail("timeout")
            .into_client();
        let mut plan = MealPlan::new();
        plan.add("palak paneer");
        plan.add("Sushi");

        let results = analyze_meal(&client, &table(), &plan, Some(&profile()))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert!(!results[0].failed);
        assert_eq!(
            results[0].summary_line().unwrap(),
            "**Thyroid Impact:** Goitrogenic – Limit in Hypothyroidism | \
             **Nutrients:** Calories: 250 kcal | Protein: 11g | Sugar: 1.5g"
        );
        assert!(results[1].failed);
        assert!(results[1].record.is_none());
        assert!(results[1].analysis.contains("timeout"));

        let requests = client.backend().requests();
        assert!(requests[0][0].content.contains("'Hypothyroidism'"));
        assert!(requests[1][0].content.contains("general nutrition knowledge"));
    }
}
