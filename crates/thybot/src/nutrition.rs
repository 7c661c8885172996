//! Static nutrition reference table and thyroid-impact tagging.
//!
//! The table is a CSV with (at least) the columns `Dish Name`,
//! `Calories (kcal)`, `Protein (g)`, `Free Sugar (g)` and `Thyroid_Impact`.
//! It is loaded once and never modified at runtime; `thybot tag-impact`
//! rewrites the impact column offline.
use std::{fmt, fs::File, io, path::Path};

use thybot_types::food::FoodRecord;

use crate::error::NutritionError;

pub const DISH_COLUMN: &str = "Dish Name";
pub const IMPACT_COLUMN: &str = "Thyroid_Impact";

const GOITROGENIC: [&str; 9] = [
    "cabbage",
    "cauliflower",
    "spinach",
    "broccoli",
    "mustard",
    "soy",
    "tofu",
    "peanut",
    "radish",
];

const THYROID_SUPPORTIVE: [&str; 10] = [
    "fish",
    "egg",
    "milk",
    "yogurt",
    "curd",
    "cheese",
    "iodized salt",
    "brazil nut",
    "almond",
    "cashew",
];

/// Coarse thyroid impact of a dish, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThyroidImpact {
    Goitrogenic,
    Supportive,
    Neutral,
}

impl ThyroidImpact {
    pub fn label(self) -> &'static str {
        match self {
            ThyroidImpact::Goitrogenic => "Goitrogenic – Limit in Hypothyroidism",
            ThyroidImpact::Supportive => "Thyroid Supportive – Good for Thyroid Health",
            ThyroidImpact::Neutral => "Neutral – No major thyroid impact",
        }
    }
}

impl fmt::Display for ThyroidImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword tagging: goitrogenic keywords win over supportive ones.
pub fn tag_thyroid_impact(dish_name: &str) -> ThyroidImpact {
    let name = dish_name.to_lowercase();
    if GOITROGENIC.iter().any(|k| name.contains(k)) {
        ThyroidImpact::Goitrogenic
    } else if THYROID_SUPPORTIVE.iter().any(|k| name.contains(k)) {
        ThyroidImpact::Supportive
    } else {
        ThyroidImpact::Neutral
    }
}

#[derive(Debug, Clone, Default)]
pub struct NutritionTable {
    records: Vec<FoodRecord>,
}

impl NutritionTable {
    pub fn new(records: Vec<FoodRecord>) -> Self {
        Self { records }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NutritionError> {
        let file = File::open(path.as_ref())?;
        let table = Self::from_reader(file)?;
        tracing::info!(path = %path.as_ref().display(), dishes = table.len(), "nutrition table loaded");
        Ok(table)
    }

    pub fn from_reader(reader: impl io::Read) -> Result<Self, NutritionError> {
        let records = csv::Reader::from_reader(reader)
            .deserialize()
            .collect::<Result<Vec<FoodRecord>, _>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact match on the dish name first, then a trimmed case-insensitive
    /// match.
    pub fn lookup(&self, dish: &str) -> Option<&FoodRecord> {
        self.records
            .iter()
            .find(|r| r.dish_name == dish)
            .or_else(|| {
                let wanted = dish.trim().to_lowercase();
                self.records
                    .iter()
                    .find(|r| r.dish_name.trim().to_lowercase() == wanted)
            })
    }

    /// All dish names, sorted.
    pub fn dish_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.iter().map(|r| r.dish_name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Recompute the `Thyroid_Impact` column of the CSV at `input` and write
/// the result to `output` (which may be the same file). Other columns are
/// copied unchanged; the impact column is appended if missing.
///
/// Returns the number of rows written.
pub fn retag_csv(input: &Path, output: &Path) -> Result<usize, NutritionError> {
    let mut reader = csv::Reader::from_path(input)?;
    let mut headers = reader.headers()?.clone();

    let dish_idx = headers
        .iter()
        .position(|h| h == DISH_COLUMN)
        .ok_or(NutritionError::MissingColumn(DISH_COLUMN))?;
    let impact_idx = match headers.iter().position(|h| h == IMPACT_COLUMN) {
        Some(idx) => idx,
        None => {
            headers.push_field(IMPACT_COLUMN);
            headers.len() - 1
        }
    };

    let rows = reader
        .records()
        .map(|row| -> Result<csv::StringRecord, NutritionError> {
            let row = row?;
            let impact = tag_thyroid_impact(row.get(dish_idx).unwrap_or_default());
            let mut fields: Vec<&str> = row.iter().collect();
            fields.resize(headers.len(), "");
            fields[impact_idx] = impact.label();
            Ok(csv::StringRecord::from(fields))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(&headers)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    tracing::info!(rows = rows.len(), output = %output.display(), "thyroid impact column written");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const TABLE: &str = "\
Dish Name,Calories (kcal),Protein (g),Free Sugar (g),Thyroid_Impact
Palak paneer,180.5,9.2,1.1,Goitrogenic – Limit in Hypothyroidism
Egg curry,187.6,9.5,2,Thyroid Supportive – Good for Thyroid Health
Aloo paratha,290,6,0.5,Neutral – No major thyroid impact
";

    #[test]
    fn tags_follow_keyword_precedence() {
        assert_eq!(tag_thyroid_impact("Cabbage thoran"), ThyroidImpact::Goitrogenic);
        assert_eq!(tag_thyroid_impact("Fish fry"), ThyroidImpact::Supportive);
        assert_eq!(tag_thyroid_impact("Tofu with cheese"), ThyroidImpact::Goitrogenic);
        assert_eq!(tag_thyroid_impact("Plain rice"), ThyroidImpact::Neutral);
        assert_eq!(
            ThyroidImpact::Neutral.to_string(),
            "Neutral – No major thyroid impact"
        );
    }

    #[test]
    fn lookup_is_exact_then_case_insensitive() {
        let table = NutritionTable::from_reader(TABLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup("Egg curry").unwrap().protein_g, 9.5);
        assert_eq!(table.lookup("  egg CURRY ").unwrap().dish_name, "Egg curry");
        assert!(table.lookup("Sushi").is_none());
        assert_eq!(table.dish_names(), vec!["Aloo paratha", "Egg curry", "Palak paneer"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = NutritionTable::from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, NutritionError::Io(_)));
    }

    #[test]
    fn retag_adds_the_impact_column_and_keeps_others() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("food.csv");
        fs::write(
            &input,
            "Dish Name,Calories (kcal),Protein (g),Free Sugar (g),Region\n\
             Spinach dal,150,8,1,North\n\
             Curd rice,200,5,3,South\n",
        )
        .unwrap();

        let output = dir.path().join("tagged.csv");
        assert_eq!(retag_csv(&input, &output).unwrap(), 2);

        let table = NutritionTable::from_path(&output).unwrap();
        assert_eq!(
            table.lookup("Spinach dal").unwrap().thyroid_impact,
            ThyroidImpact::Goitrogenic.label()
        );
        assert_eq!(
            table.lookup("Curd rice").unwrap().thyroid_impact,
            ThyroidImpact::Supportive.label()
        );
        assert!(fs::read_to_string(&output).unwrap().contains(",North,"));
    }

    #[test]
    fn retag_in_place_overwrites_stale_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("food.csv");
        fs::write(&path, TABLE.replace("Neutral – No major thyroid impact", "stale")).unwrap();

        retag_csv(&path, &path).unwrap();
        let table = NutritionTable::from_path(&path).unwrap();
        assert_eq!(
            table.lookup("Aloo paratha").unwrap().thyroid_impact,
            ThyroidImpact::Neutral.label()
        );
    }

    #[test]
    fn retag_requires_dish_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "Name,Calories\nRice,100\n").unwrap();
        assert!(matches!(
            retag_csv(&path, &path),
            Err(NutritionError::MissingColumn(DISH_COLUMN))
        ));
    }
}
