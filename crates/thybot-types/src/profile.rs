//! Patient profile and the thyroid classifier.
//!
//! Lab units: TSH in mIU/L, free T3 in pg/mL, free T4 in ng/dL. Values are
//! taken as entered; physical plausibility is not checked.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Label shown in prompts when no profile has been saved.
pub const STATUS_NOT_SPECIFIED: &str = "Not specified";

/// Thyroid function category derived from TSH, free T3 and free T4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThyroidStatus {
    Hypothyroidism,
    Hyperthyroidism,
    Normal,
    Borderline,
}

impl ThyroidStatus {
    /// Classify a set of lab values.
    ///
    /// The rules are evaluated in a fixed order and the first match wins:
    ///
    /// 1. `tsh > 4.0` and (`t3 < 2.3` or `t4 < 0.8`) → hypothyroidism
    /// 2. `tsh < 0.4` and (`t3 > 4.2` or `t4 > 1.8`) → hyperthyroidism
    /// 3. all three inside their reference ranges (inclusive) → normal
    /// 4. anything else → borderline
    ///
    /// ```rust
    /// use thybot_types::profile::ThyroidStatus;
    ///
    /// assert_eq!(ThyroidStatus::classify(2.0, 3.0, 1.2), ThyroidStatus::Normal);
    /// assert_eq!(ThyroidStatus::classify(4.0, 3.0, 1.2), ThyroidStatus::Normal);
    /// ```
    pub fn classify(tsh: f64, t3: f64, t4: f64) -> Self {
        if tsh > 4.0 && (t3 < 2.3 || t4 < 0.8) {
            ThyroidStatus::Hypothyroidism
        } else if tsh < 0.4 && (t3 > 4.2 || t4 > 1.8) {
            ThyroidStatus::Hyperthyroidism
        } else if (0.4..=4.0).contains(&tsh)
            && (2.3..=4.2).contains(&t3)
            && (0.8..=1.8).contains(&t4)
        {
            ThyroidStatus::Normal
        } else {
            ThyroidStatus::Borderline
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThyroidStatus::Hypothyroidism => "Hypothyroidism",
            ThyroidStatus::Hyperthyroidism => "Hyperthyroidism",
            ThyroidStatus::Normal => "Normal",
            ThyroidStatus::Borderline => "Borderline / Consult Physician",
        }
    }
}

impl Display for ThyroidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Body-mass index in kg/m². Returns `0.0` when `height_cm` is not positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm > 0.0 {
        let height_m = height_cm / 100.0;
        weight_kg / (height_m * height_m)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Female,
    Male,
    Other,
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => write!(f, "Female"),
            Gender::Male => write!(f, "Male"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Gender::Female),
            "male" | "m" => Ok(Gender::Male),
            "other" | "o" => Ok(Gender::Other),
            other => Err(format!("unknown gender `{other}`")),
        }
    }
}

/// Raw values as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub tsh: f64,
    pub t3: f64,
    pub t4: f64,
}

/// A saved patient profile with its derived values.
///
/// Profiles are never edited in place: saving the form again replaces the
/// whole value, so `bmi` and `thyroid_status` always match the raw fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub tsh: f64,
    pub t3: f64,
    pub t4: f64,
    pub thyroid_status: ThyroidStatus,
}

impl PatientProfile {
    pub fn new(form: ProfileForm) -> Self {
        Self {
            bmi: bmi(form.weight_kg, form.height_cm),
            thyroid_status: ThyroidStatus::classify(form.tsh, form.t3, form.t4),
            name: form.name,
            age: form.age,
            gender: form.gender,
            weight_kg: form.weight_kg,
            height_cm: form.height_cm,
            tsh: form.tsh,
            t3: form.t3,
            t4: form.t4,
        }
    }

    /// The raw values, e.g. to pre-fill the form when editing.
    pub fn to_form(&self) -> ProfileForm {
        ProfileForm {
            name: self.name.clone(),
            age: self.age,
            gender: self.gender,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            tsh: self.tsh,
            t3: self.t3,
            t4: self.t4,
        }
    }
}

/// Status label for prompts, falling back to [`STATUS_NOT_SPECIFIED`].
pub fn status_label(profile: Option<&PatientProfile>) -> String {
    profile
        .map(|p| p.thyroid_status.to_string())
        .unwrap_or_else(|| STATUS_NOT_SPECIFIED.to_owned())
}
