//! # Personalization Engine
//!
//! This module tailors the analysis narrative to the consumer reading it.
//! Preferences are plain immutable values: every update builds a new value,
//! so two analyses run with the same preferences always read the same.
//!
//! ## Core Concepts
//!
//! - **UserGoal**: which of five reader personas the narrative addresses
//! - **TonePreference**: requested verbosity (accepted and carried, but the
//!   current copy does not branch on it)
//! - **Highlight**: one "what matters most" callout with its priority
//!
//! ## Usage
//!
//! ```rust
//! use labelscan::personalization::{UserGoal, UserPreferences};
//!
//! let preferences = UserPreferences::default()
//!     .with_goal(UserGoal::FitnessFocused)
//!     .with_flag_high_sugar(true);
//! assert_eq!(preferences.goal, UserGoal::FitnessFocused);
//! ```

use crate::analysis::{Ingredient, VerdictKind};
use crate::knowledge_base::Classification;
use serde::{Deserialize, Serialize};

/// Reader persona the narrative is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserGoal {
    /// Everyday shopper without a specific agenda
    #[default]
    NormalConsumer,
    /// Optimizing for training and performance
    FitnessFocused,
    /// Prefers clean labels and whole foods
    HealthConscious,
    /// Managing allergies, intolerances, or medical conditions
    MedicalSensitivity,
    /// Reading labels to learn, not to decide
    CuriousLearner,
}

impl UserGoal {
    /// Human-readable name for UI and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            UserGoal::NormalConsumer => "Normal consumer",
            UserGoal::FitnessFocused => "Fitness focused",
            UserGoal::HealthConscious => "Health conscious",
            UserGoal::MedicalSensitivity => "Medical sensitivity",
            UserGoal::CuriousLearner => "Curious learner",
        }
    }
}

/// Requested narrative verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TonePreference {
    Simple,
    #[default]
    Balanced,
    Detailed,
}

/// Immutable analysis preferences
///
/// Defaults to the normal-consumer persona with every flag off. Updates go
/// through the consuming `with_*` builders; resetting is just
/// `UserPreferences::default()`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Persona the insight paragraph addresses
    pub goal: UserGoal,
    /// Verbosity request, carried for the caller
    pub tone: TonePreference,
    /// Surface added-sugar callouts
    pub flag_high_sugar: bool,
    /// Surface synthetic additive callouts
    pub flag_artificial_additives: bool,
    /// Surface preservative callouts
    pub flag_preservatives: bool,
    /// Surface allergen callouts
    pub flag_allergens: bool,
}

impl UserPreferences {
    /// Preferences with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reader persona
    pub fn with_goal(mut self, goal: UserGoal) -> Self {
        self.goal = goal;
        self
    }

    /// Set the narrative tone
    pub fn with_tone(mut self, tone: TonePreference) -> Self {
        self.tone = tone;
        self
    }

    /// Toggle added-sugar callouts
    pub fn with_flag_high_sugar(mut self, flag: bool) -> Self {
        self.flag_high_sugar = flag;
        self
    }

    /// Toggle synthetic additive callouts
    pub fn with_flag_artificial_additives(mut self, flag: bool) -> Self {
        self.flag_artificial_additives = flag;
        self
    }

    /// Toggle preservative callouts
    pub fn with_flag_preservatives(mut self, flag: bool) -> Self {
        self.flag_preservatives = flag;
        self
    }

    /// Toggle allergen callouts
    pub fn with_flag_allergens(mut self, flag: bool) -> Self {
        self.flag_allergens = flag;
        self
    }
}

/// One "what matters most" callout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Ingredient name as it appears in the result
    pub name: String,
    /// Why this ingredient deserves attention
    pub reason: String,
    /// Scoring priority (10 is highest); kept so callers can layer their
    /// own ordering on top
    pub priority: u8,
}

/// Goal-specific closing paragraph
///
/// The verdict and ingredient list are accepted for context, but the current
/// copy varies only by goal.
pub fn insight(
    preferences: &UserPreferences,
    _verdict: VerdictKind,
    _ingredients: &[Ingredient],
) -> String {
    let text = match preferences.goal {
        UserGoal::NormalConsumer => {
            "This product is primarily a source of carbohydrates and fat, with flavor coming from a mix of natural spices and synthetic enhancers. If you're looking for a quick meal, it can fit, but consider its nutritional density and the presence of refined ingredients and additives."
        }
        UserGoal::FitnessFocused => {
            "From a fitness perspective, this product may not provide optimal nutrition. It's high in refined carbohydrates and may contain additives that don't support performance goals. Consider whole food alternatives for better nutrient density."
        }
        UserGoal::HealthConscious => {
            "For health-conscious individuals, this product contains several processed and synthetic ingredients that may not align with clean eating principles. The presence of additives and refined ingredients suggests it's better as an occasional choice."
        }
        UserGoal::MedicalSensitivity => {
            "If you have specific sensitivities or medical conditions, pay close attention to the synthetic additives and processed ingredients in this product. Some individuals report sensitivity to certain flavor enhancers and preservatives."
        }
        UserGoal::CuriousLearner => {
            "This product offers an interesting case study in food manufacturing. It combines natural spices with synthetic flavor enhancers and processed ingredients to create a convenient, shelf-stable product. Understanding these ingredients helps you make informed choices."
        }
    };
    text.to_string()
}

/// Pick the one or two ingredients the reader should look at first
///
/// Each ingredient is scored by the first matching rule below (the chain is
/// exclusive, so one ingredient gets at most one reason), then the list is
/// sorted by priority (stable, so ties keep label order) and cut to two.
pub fn what_matters_most(
    ingredients: &[Ingredient],
    preferences: &UserPreferences,
) -> Vec<Highlight> {
    let mut highlights: Vec<Highlight> = Vec::new();

    for ingredient in ingredients {
        let lower = ingredient.name.to_lowercase();
        let mut priority = 0u8;
        let mut reason = String::new();

        if preferences.flag_high_sugar
            && (lower.contains("sugar") || lower.contains("syrup") || lower.contains("fructose"))
        {
            priority = 10;
            reason = "This is a major source of added sugar. Evidence shows excessive sugar intake is linked to weight gain, blood sugar spikes, and increased diabetes risk. Effects vary by individual, but most health organizations recommend limiting added sugars.".to_string();
        } else if (preferences.flag_artificial_additives || preferences.flag_preservatives)
            && ingredient.classification == Classification::Synthetic
        {
            if lower.contains("msg") || lower.contains("glutamate") {
                priority = 9;
                reason = "This flavor enhancer is controversial. Research is evolving — while FDA considers it safe, some individuals report sensitivity. It may increase appetite and mask lower-quality ingredients.".to_string();
            } else if lower.contains("benzoate") || lower.contains("sorbate") {
                priority = 8;
                reason = "This preservative extends shelf life but is synthetic. Evidence is mixed on long-term effects. Some people report headaches or digestive issues, though reactions vary by individual.".to_string();
            } else if lower.contains("color") || lower.contains("yellow") || lower.contains("red") {
                priority = 7;
                reason = "Artificial colors have no nutritional value. Research is evolving on potential behavioral effects in children. Many health-conscious consumers prefer to avoid them.".to_string();
            }
        } else if preferences.flag_allergens
            && ingredient
                .allergens
                .as_ref()
                .is_some_and(|allergens| !allergens.is_empty())
        {
            priority = 10;
            let allergens = ingredient
                .allergens
                .as_ref()
                .map(|allergens| allergens.join(", "))
                .unwrap_or_default();
            reason = format!(
                "Contains {} — a common allergen. Critical for those with sensitivities or allergies. Effects range from mild discomfort to severe reactions depending on individual tolerance.",
                allergens
            );
        } else if (preferences.goal == UserGoal::FitnessFocused
            || preferences.goal == UserGoal::HealthConscious)
            && lower.contains("flour")
            && !lower.contains("whole")
        {
            priority = 6;
            reason = "Refined flour is stripped of fiber and nutrients. Evidence shows it causes faster blood sugar spikes compared to whole grains. Impact varies, but those managing weight or blood sugar should be aware.".to_string();
        } else if preferences.goal == UserGoal::HealthConscious && lower.contains("palm oil") {
            priority = 5;
            reason = "Palm oil is high in saturated fat. Research is mixed — some studies link it to increased cholesterol, while others show neutral effects. Health impact depends on overall diet and individual metabolism.".to_string();
        }

        if priority > 0 {
            highlights.push(Highlight {
                name: ingredient.name.clone(),
                reason,
                priority,
            });
        }
    }

    highlights.sort_by(|a, b| b.priority.cmp(&a.priority));
    highlights.truncate(2);
    highlights
}

/// Context-aware narrative opener for the result
///
/// Looks at the classification mix and a few telltale ingredient names
/// (sugars, preservatives, flavor enhancers) to pick the framing sentence.
/// An empty list falls through to the mixed-product variant.
pub fn opening_statement(
    natural_count: usize,
    processed_count: usize,
    synthetic_count: usize,
    ingredients: &[Ingredient],
) -> String {
    let total = natural_count + processed_count + synthetic_count;
    if total == 0 {
        return "This product has a mix of natural and processed ingredients. I'll help you understand which ones matter most for your health and why.".to_string();
    }

    let synthetic_percent = synthetic_count as f64 / total as f64 * 100.0;
    let processed_percent = processed_count as f64 / total as f64 * 100.0;

    let has_high_sugar = ingredients.iter().any(|ingredient| {
        let lower = ingredient.name.to_lowercase();
        lower.contains("sugar") || lower.contains("syrup") || lower.contains("sweetener")
    });

    let has_preservatives = ingredients.iter().any(|ingredient| {
        let lower = ingredient.name.to_lowercase();
        ingredient.classification == Classification::Synthetic
            && (lower.contains("benzoate")
                || lower.contains("sorbate")
                || lower.contains("propionate"))
    });

    let has_flavor_enhancers = ingredients.iter().any(|ingredient| {
        let lower = ingredient.name.to_lowercase();
        lower.contains("msg") || lower.contains("glutamate") || lower.contains("inosinate")
    });

    let text = if synthetic_percent > 30.0 || processed_percent + synthetic_percent > 60.0 {
        if has_flavor_enhancers && has_preservatives {
            "This looks like a highly processed packaged food. In products like this, what usually matters most is digestion impact and additive load — so I'll focus on those."
        } else if has_high_sugar {
            "This appears to be a processed food product with added sugars. For products like this, the key concerns are typically blood sugar impact and overall nutritional density — I'll prioritize those aspects."
        } else {
            "This is a processed food product. What matters most here is understanding which ingredients are natural versus synthetic, and how they might affect your health goals."
        }
    } else if natural_count > processed_count + synthetic_count {
        "This product has a relatively clean ingredient list with mostly natural components. I'll focus on highlighting what makes it a better choice and any minor considerations."
    } else {
        "This product has a mix of natural and processed ingredients. I'll help you understand which ones matter most for your health and why."
    };
    text.to_string()
}
