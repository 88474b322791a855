//! # Food Data Enrichment
//!
//! This module looks up scanned products in public food databases: USDA
//! FoodData Central first, OpenFoodFacts as a fallback, and the openFDA
//! enforcement feed for recall checks. Everything here is best-effort
//! enrichment layered on top of the local analysis; callers treat failures
//! as "no data" and move on.
//!
//! ## Features
//!
//! - FoodData Central search with nutrient-name to field mapping
//! - OpenFoodFacts fallback when FoodData Central has no usable hit
//! - Recall lookup against the openFDA enforcement endpoint
//! - Retries with exponential backoff and random jitter on transient
//!   failures
//!
//! ## Usage
//!
//! ```rust
//! use labelscan::food_data::{FoodDataClient, FoodDataConfig};
//!
//! let config = FoodDataConfig::default();
//! assert_eq!(config.api_key, "DEMO_KEY");
//!
//! let client = FoodDataClient::new(config).unwrap();
//! ```

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Constants for the public endpoints
pub const FDC_API_BASE: &str = "https://api.nal.usda.gov/fdc/v1";
pub const OPEN_FOOD_FACTS_SEARCH_URL: &str = "https://world.openfoodfacts.org/cgi/search.pl";
pub const FDA_ENFORCEMENT_URL: &str = "https://api.fda.gov/food/enforcement.json";
pub const API_KEY_ENV_VAR: &str = "FDA_API_KEY";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Configuration for food database lookups
#[derive(Debug, Clone)]
pub struct FoodDataConfig {
    /// FoodData Central API key; the rate-limited `DEMO_KEY` works for demos
    pub api_key: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum retry attempts after the first failure
    pub max_retries: u32,
    /// Base delay between retries in milliseconds
    pub base_retry_delay_ms: u64,
    /// Maximum delay between retries in milliseconds
    pub max_retry_delay_ms: u64,
}

impl Default for FoodDataConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            request_timeout_secs: 10,
            max_retries: 3,
            base_retry_delay_ms: 500,  // half a second
            max_retry_delay_ms: 5000,  // 5 seconds
        }
    }
}

impl FoodDataConfig {
    /// Read the API key from `FDA_API_KEY`, keeping the other defaults
    pub fn from_env() -> Self {
        Self::with_api_key(std::env::var(API_KEY_ENV_VAR).ok())
    }

    /// Build a config from an optional API key, falling back to `DEMO_KEY`
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            ..Self::default()
        }
    }
}

/// Nutrition facts extracted from a database hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub serving_size: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub sodium: Option<f64>,
    pub sugar: Option<f64>,
}

/// A product found in one of the public databases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodProduct {
    pub name: String,
    pub brand: Option<String>,
    /// Ingredient list as published by the database, possibly empty
    pub ingredients: String,
    pub nutrition: NutritionFacts,
    pub fdc_id: Option<i64>,
    /// Which database the record came from
    pub source: String,
}

#[derive(Debug, Deserialize)]
struct FdcSearchResponse {
    #[serde(default)]
    foods: Vec<FdcFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FdcFood {
    fdc_id: i64,
    description: String,
    brand_owner: Option<String>,
    ingredients: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<FdcNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FdcNutrient {
    nutrient_name: String,
    value: Option<f64>,
}

impl FdcFood {
    fn into_product(self) -> FoodProduct {
        let mut nutrition = NutritionFacts::default();
        for nutrient in &self.food_nutrients {
            let Some(value) = nutrient.value else {
                continue;
            };
            match nutrient.nutrient_name.to_lowercase().as_str() {
                "energy" | "energy (atwater general factors)" => {
                    nutrition.calories = Some(value);
                }
                "protein" => nutrition.protein = Some(value),
                "carbohydrate, by difference" | "carbohydrates" => {
                    nutrition.carbohydrates = Some(value);
                }
                "total lipid (fat)" | "fat" => nutrition.fat = Some(value),
                "sodium, na" | "sodium" => nutrition.sodium = Some(value),
                "sugars, total including nlea" | "sugars" => nutrition.sugar = Some(value),
                _ => {}
            }
        }

        FoodProduct {
            name: self.description,
            brand: self.brand_owner,
            ingredients: self.ingredients.unwrap_or_default(),
            nutrition,
            fdc_id: Some(self.fdc_id),
            source: "FDA FoodData Central (USDA)".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OffSearchResponse {
    #[serde(default)]
    products: Vec<OffProduct>,
}

#[derive(Debug, Deserialize)]
struct OffProduct {
    product_name: Option<String>,
    brands: Option<String>,
    ingredients_text: Option<String>,
    serving_size: Option<String>,
    #[serde(default)]
    nutriments: OffNutriments,
}

#[derive(Debug, Default, Deserialize)]
struct OffNutriments {
    #[serde(rename = "energy-kcal")]
    energy_kcal: Option<f64>,
    proteins: Option<f64>,
    carbohydrates: Option<f64>,
    fat: Option<f64>,
    sodium: Option<f64>,
    sugars: Option<f64>,
}

impl OffProduct {
    fn into_product(self, fallback_name: &str) -> FoodProduct {
        FoodProduct {
            name: self
                .product_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| fallback_name.to_string()),
            brand: self.brands,
            ingredients: self.ingredients_text.unwrap_or_default(),
            nutrition: NutritionFacts {
                serving_size: self.serving_size,
                calories: self.nutriments.energy_kcal,
                protein: self.nutriments.proteins,
                carbohydrates: self.nutriments.carbohydrates,
                fat: self.nutriments.fat,
                sodium: self.nutriments.sodium,
                sugar: self.nutriments.sugars,
            },
            fdc_id: None,
            source: "OpenFoodFacts".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EnforcementResponse {
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

/// HTTP client for the public food databases
#[derive(Debug, Clone)]
pub struct FoodDataClient {
    http: reqwest::Client,
    config: FoodDataConfig,
}

impl FoodDataClient {
    /// Build a client with the given configuration
    pub fn new(config: FoodDataConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client for food data lookups")?;
        Ok(Self { http, config })
    }

    /// Build a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(FoodDataConfig::from_env())
    }

    /// Search FoodData Central and map the first hit
    ///
    /// Returns `Ok(None)` when the API answers without a usable result; `Err`
    /// only for transport or decoding failures that survived the retries.
    pub async fn search_fdc(&self, query: &str) -> Result<Option<FoodProduct>> {
        info!("Searching FoodData Central for: {}", query);

        let url = format!("{FDC_API_BASE}/foods/search");
        let params = [
            ("query", query),
            ("pageSize", "1"),
            ("api_key", self.config.api_key.as_str()),
        ];
        let response = self.get_with_retry(&url, &params).await?;

        if !response.status().is_success() {
            warn!(
                "FoodData Central returned status {} for {:?}",
                response.status(),
                query
            );
            return Ok(None);
        }

        let data: FdcSearchResponse = response
            .json()
            .await
            .context("Failed to decode FoodData Central response")?;

        let Some(food) = data.foods.into_iter().next() else {
            debug!("No FoodData Central results for {:?}", query);
            return Ok(None);
        };

        info!("Found in FoodData Central: {}", food.description);
        Ok(Some(food.into_product()))
    }

    /// Search the OpenFoodFacts database
    pub async fn search_open_food_facts(&self, query: &str) -> Result<Option<FoodProduct>> {
        info!("Searching OpenFoodFacts for: {}", query);

        let params = [
            ("search_terms", query),
            ("search_simple", "1"),
            ("json", "1"),
            ("page_size", "1"),
        ];
        let response = self
            .get_with_retry(OPEN_FOOD_FACTS_SEARCH_URL, &params)
            .await?;

        if !response.status().is_success() {
            warn!(
                "OpenFoodFacts returned status {} for {:?}",
                response.status(),
                query
            );
            return Ok(None);
        }

        let data: OffSearchResponse = response
            .json()
            .await
            .context("Failed to decode OpenFoodFacts response")?;

        let Some(product) = data.products.into_iter().next() else {
            debug!("No OpenFoodFacts results for {:?}", query);
            return Ok(None);
        };

        Ok(Some(product.into_product(query)))
    }

    /// Search FoodData Central first, falling back to OpenFoodFacts
    ///
    /// The fallback also covers FoodData Central hits without an ingredient
    /// list, since those are useless for label comparison.
    pub async fn search_product(&self, query: &str) -> Result<Option<FoodProduct>> {
        match self.search_fdc(query).await {
            Ok(Some(product)) if !product.ingredients.is_empty() => return Ok(Some(product)),
            Ok(_) => {}
            Err(e) => warn!("FoodData Central lookup failed, trying OpenFoodFacts: {}", e),
        }

        self.search_open_food_facts(query).await
    }

    /// Check the openFDA enforcement feed for recalls naming the product
    ///
    /// The endpoint answers 404 for "no matching records", which maps to
    /// `Ok(false)` here.
    pub async fn check_recalls(&self, product_name: &str) -> Result<bool> {
        debug!("Checking recall records for: {}", product_name);

        let search = format!("product_description:\"{product_name}\"");
        let params = [("search", search.as_str()), ("limit", "1")];
        let response = self.get_with_retry(FDA_ENFORCEMENT_URL, &params).await?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let data: EnforcementResponse = response
            .json()
            .await
            .context("Failed to decode enforcement response")?;
        Ok(!data.results.is_empty())
    }

    /// GET with retries on transport errors and retryable statuses
    ///
    /// Returns the response whatever its final status; callers decide what a
    /// non-success status means for their endpoint.
    async fn get_with_retry(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<reqwest::Response> {
        let mut attempt: u32 = 0;
        loop {
            match self.http.get(url).query(params).send().await {
                Ok(response) => {
                    let status = response.status();
                    if !is_retryable(status) || attempt >= self.config.max_retries {
                        return Ok(response);
                    }
                    warn!("Request to {} returned {}, retrying", url, status);
                }
                Err(e) => {
                    if attempt >= self.config.max_retries {
                        return Err(e).with_context(|| {
                            format!("Request to {url} failed after {} attempts", attempt + 1)
                        });
                    }
                    warn!("Request to {} failed ({}), retrying", url, e);
                }
            }

            attempt += 1;
            tokio::time::sleep(self.retry_delay(attempt)).await;
        }
    }

    /// Exponential backoff with random jitter so concurrent callers do not
    /// hammer the APIs in lockstep
    fn retry_delay(&self, attempt: u32) -> Duration {
        let exponential = self
            .config
            .base_retry_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        let capped = exponential.min(self.config.max_retry_delay_ms);
        let jitter = rand::thread_rng().gen_range(0..=capped / 4);
        Duration::from_millis(capped.saturating_add(jitter))
    }
}

fn is_retryable(status: reqwest::StatusCode) -> bool {
    status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
}
