use serde::{Deserialize, Serialize};

/// One row of the nutrition reference table.
///
/// Field names follow the CSV header of the table ThyBot ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(rename = "Dish Name")]
    pub dish_name: String,
    #[serde(rename = "Calories (kcal)")]
    pub calories_kcal: f64,
    #[serde(rename = "Protein (g)")]
    pub protein_g: f64,
    #[serde(rename = "Free Sugar (g)")]
    pub free_sugar_g: f64,
    #[serde(rename = "Thyroid_Impact", default)]
    pub thyroid_impact: String,
}

impl FoodRecord {
    /// `Calories: 120 kcal | Protein: 4.5g | Sugar: 2g`
    pub fn nutrients_line(&self) -> String {
        format!(
            "Calories: {:.0} kcal | Protein: {}g | Sugar: {}g",
            self.calories_kcal, self.protein_g, self.free_sugar_g
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutrients_line_rounds_calories_only() {
        let record = FoodRecord {
            dish_name: "Egg curry".into(),
            calories_kcal: 187.6,
            protein_g: 9.5,
            free_sugar_g: 2.0,
            thyroid_impact: String::new(),
        };
        assert_eq!(
            record.nutrients_line(),
            "Calories: 188 kcal | Protein: 9.5g | Sugar: 2g"
        );
    }
}
