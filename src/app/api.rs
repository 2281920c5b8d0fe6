//! Prediction wire types shared by the client and the server proxy, plus the
//! browser-side POST helper.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Path of the server-side proxy to the prediction service
pub const PREDICT_PATH: &str = "/api/predict";

/// Factors already shown under personal information
const HIDDEN_FACTORS: &[&str] = &["Age", "Gender", "Height"];

// =============================================================================
// Request
// =============================================================================

/// Health metrics sent to the prediction service.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    /// Age in years
    pub age: f64,
    /// 1 = male, 2 = female
    pub gender: u8,
    /// Height in cm
    pub height: f64,
    /// Weight in kg
    pub weight: f64,
    /// Systolic blood pressure
    pub ap_hi: i32,
    /// Diastolic blood pressure
    pub ap_lo: i32,
    /// 1 = normal, 2 = above normal, 3 = well above normal
    pub cholesterol: u8,
    /// Same scale as cholesterol
    pub gluc: u8,
    pub smoke: u8,
    pub alco: u8,
    pub active: u8,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} has no option {value}")]
    InvalidChoice { field: &'static str, value: i64 },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing(field)
            | ValidationError::NotANumber(field)
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidChoice { field, .. } => *field,
        }
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, min, max })
    }
}

fn check_choice(
    field: &'static str,
    value: u8,
    allowed: &[u8],
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidChoice {
            field,
            value: value as i64,
        })
    }
}

impl PredictionRequest {
    /// Every rule violation, in form order.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        [
            check_range("age", self.age, 1.0, 120.0),
            check_choice("gender", self.gender, &[1, 2]),
            check_range("height", self.height, 50.0, 250.0),
            check_range("weight", self.weight, 20.0, 300.0),
            check_choice("cholesterol", self.cholesterol, &[1, 2, 3]),
            check_choice("gluc", self.gluc, &[1, 2, 3]),
            check_choice("smoke", self.smoke, &[0, 1]),
            check_choice("alco", self.alco, &[0, 1]),
            check_choice("active", self.active, &[0, 1]),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.validation_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Response
// =============================================================================

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::High => "text-red-500",
            RiskLevel::Medium => "text-yellow-400",
            RiskLevel::Low | RiskLevel::Unknown => "text-green-400",
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Factor {
    pub factor: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    /// Probability of cardiovascular disease, 0.0 - 1.0
    pub probability: f64,
    pub risk_level: RiskLevel,
    /// Model accuracy in percent
    pub model_accuracy: f64,
    #[serde(default)]
    pub healthy_factors: Vec<Factor>,
    #[serde(default)]
    pub unhealthy_factors: Vec<Factor>,
    /// Display name -> value, in server order
    #[serde(default)]
    pub personal_info: Map<String, Value>,
    #[serde(default)]
    pub calculated_info: Map<String, Value>,
    /// Echo of the submitted metrics, when the service includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Map<String, Value>>,
}

impl PredictionResponse {
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }

    pub fn accuracy_percent(&self) -> String {
        format!("{:.2}%", self.model_accuracy)
    }

    /// Healthy share of all reported factors in percent, `None` when the
    /// service reported none.
    pub fn healthy_share(&self) -> Option<f64> {
        let healthy = self.healthy_factors.len();
        let total = healthy + self.unhealthy_factors.len();
        (total > 0).then(|| healthy as f64 * 100.0 / total as f64)
    }

    pub fn shown_healthy_factors(&self) -> Vec<&Factor> {
        shown(&self.healthy_factors)
    }

    pub fn shown_unhealthy_factors(&self) -> Vec<&Factor> {
        shown(&self.unhealthy_factors)
    }
}

fn shown(factors: &[Factor]) -> Vec<&Factor> {
    factors
        .iter()
        .filter(|f| !HIDDEN_FACTORS.contains(&f.factor.as_str()))
        .collect()
}

/// Render an info map value without JSON quoting
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

// =============================================================================
// Client-side fetch helpers
// =============================================================================

/// POST JSON to a URL and decode the JSON reply (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
    url: &str,
    body: &T,
) -> Result<R, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let body_str = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body_str));

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;
    if !resp.ok() {
        return Err(format!("HTTP {} from {}", resp.status(), url));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("{:?}", e))
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
    _url: &str,
    _body: &T,
) -> Result<R, String> {
    Err("post_json is only available in browser".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> PredictionRequest {
        PredictionRequest {
            age: 45.0,
            gender: 1,
            height: 170.0,
            weight: 75.0,
            ap_hi: 120,
            ap_lo: 80,
            cholesterol: 1,
            gluc: 1,
            smoke: 0,
            alco: 0,
            active: 1,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_request_serializes_snake_case_fields() {
        let json = serde_json::to_value(valid_request()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 11);
        assert_eq!(obj["ap_hi"], 120);
        assert_eq!(obj["gluc"], 1);
    }

    #[test]
    fn test_out_of_range_fields_reported_in_order() {
        let request = PredictionRequest {
            age: 130.0,
            weight: 10.0,
            smoke: 2,
            ..valid_request()
        };
        let fields: Vec<_> = request
            .validation_errors()
            .iter()
            .map(|e| e.field())
            .collect();
        assert_eq!(fields, ["age", "weight", "smoke"]);
        assert_eq!(
            request.validate().unwrap_err().to_string(),
            "age must be between 1 and 120"
        );
    }

    #[test]
    fn test_nan_is_out_of_range() {
        let request = PredictionRequest {
            height: f64::NAN,
            ..valid_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ValidationError::OutOfRange { field: "height", .. })
        ));
    }

    #[test]
    fn test_response_from_service_json() {
        let json = r#"{
            "probability": 0.72,
            "risk_level": "High",
            "model_accuracy": 73.41,
            "healthy_factors": [
                {"factor": "Glucose", "description": "Glucose is in a healthy range"}
            ],
            "unhealthy_factors": [
                {"factor": "Systolic BP", "description": "High blood pressure increases strain on the heart."},
                {"factor": "Age", "description": ""}
            ],
            "inputs": {"age": 60},
            "personal_info": {"Age": 60, "Gender": "Male", "Height (cm)": 170.0, "Weight (kg)": 90.0},
            "calculated_info": {"BMI": 31.14, "Pulse Pressure": 60.0, "Smoking": "No"}
        }"#;

        let resp: PredictionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.risk_level, RiskLevel::High);
        assert_eq!(resp.probability_percent(), "72.00%");
        assert_eq!(resp.accuracy_percent(), "73.41%");
        assert_eq!(resp.shown_unhealthy_factors().len(), 1);
        assert_eq!(resp.shown_healthy_factors()[0].factor, "Glucose");
        // Hidden factors still count towards the split
        assert_eq!(resp.healthy_share().map(f64::round), Some(33.0));

        let keys: Vec<_> = resp.personal_info.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Age", "Gender", "Height (cm)", "Weight (kg)"]);
        assert_eq!(display_value(&resp.personal_info["Gender"]), "Male");
        assert_eq!(display_value(&resp.calculated_info["BMI"]), "31.14");
        assert_eq!(resp.inputs.unwrap()["age"], 60);
    }

    #[test]
    fn test_unknown_risk_level_tolerated() {
        let resp: PredictionResponse = serde_json::from_str(
            r#"{"probability": 0.1, "risk_level": "Minimal", "model_accuracy": 70.0}"#,
        )
        .unwrap();
        assert_eq!(resp.risk_level, RiskLevel::Unknown);
        assert_eq!(resp.risk_level.css_class(), "text-green-400");
        assert!(resp.healthy_factors.is_empty());
        assert_eq!(resp.healthy_share(), None);
    }
}
