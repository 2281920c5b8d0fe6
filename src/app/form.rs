//! Raw prediction form input and its conversion into a request.

use std::collections::BTreeMap;

use super::api::{PredictionRequest, ValidationError};

/// Form field values exactly as typed/selected by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionForm {
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub ap_hi: String,
    pub ap_lo: String,
    pub cholesterol: String,
    pub gluc: String,
    pub smoke: String,
    pub alco: String,
    pub active: String,
}

/// Per-field error messages, keyed by field name.
pub type FormErrors = BTreeMap<&'static str, String>;

fn number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    raw.parse().map_err(|_| ValidationError::NotANumber(field))
}

impl PredictionForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "age" => &self.age,
            "gender" => &self.gender,
            "height" => &self.height,
            "weight" => &self.weight,
            "ap_hi" => &self.ap_hi,
            "ap_lo" => &self.ap_lo,
            "cholesterol" => &self.cholesterol,
            "gluc" => &self.gluc,
            "smoke" => &self.smoke,
            "alco" => &self.alco,
            "active" => &self.active,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let slot = match name {
            "age" => &mut self.age,
            "gender" => &mut self.gender,
            "height" => &mut self.height,
            "weight" => &mut self.weight,
            "ap_hi" => &mut self.ap_hi,
            "ap_lo" => &mut self.ap_lo,
            "cholesterol" => &mut self.cholesterol,
            "gluc" => &mut self.gluc,
            "smoke" => &mut self.smoke,
            "alco" => &mut self.alco,
            "active" => &mut self.active,
            _ => return None,
        };
        Some(slot)
    }

    /// Parse and validate every field. On failure returns one message per
    /// offending field.
    pub fn parse(&self) -> Result<PredictionRequest, FormErrors> {
        let mut errors = FormErrors::new();
        let mut note = |err: ValidationError| {
            errors.entry(err.field()).or_insert_with(|| err.to_string());
        };

        let mut request = PredictionRequest::default();
        macro_rules! parse_into {
            ($($field:ident),*) => {
                $(
                    match number(stringify!($field), &self.$field) {
                        Ok(v) => request.$field = v,
                        Err(e) => note(e),
                    }
                )*
            };
        }
        parse_into!(age, gender, height, weight, ap_hi, ap_lo, cholesterol, gluc, smoke, alco, active);

        // Range rules only matter for fields that parsed
        for err in request.validation_errors() {
            note(err);
        }

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PredictionForm {
        PredictionForm {
            age: "45".into(),
            gender: "2".into(),
            height: "165".into(),
            weight: "60.5".into(),
            ap_hi: "120".into(),
            ap_lo: "80".into(),
            cholesterol: "2".into(),
            gluc: "1".into(),
            smoke: "0".into(),
            alco: "0".into(),
            active: "1".into(),
        }
    }

    #[test]
    fn test_filled_form_parses() {
        let request = filled().parse().unwrap();
        assert_eq!(request.age, 45.0);
        assert_eq!(request.gender, 2);
        assert_eq!(request.weight, 60.5);
        assert_eq!(request.cholesterol, 2);
    }

    #[test]
    fn test_empty_form_reports_every_field_once() {
        let errors = PredictionForm::default().parse().unwrap_err();
        assert_eq!(errors.len(), 11);
        assert_eq!(errors["age"], "age is required");
        assert_eq!(errors["ap_lo"], "ap_lo is required");
    }

    #[test]
    fn test_range_errors_after_parse() {
        let form = PredictionForm {
            age: "0".into(),
            height: "300".into(),
            ..filled()
        };
        let errors = form.parse().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["age"], "age must be between 1 and 120");
        assert!(errors.contains_key("height"));
    }

    #[test]
    fn test_garbage_is_not_a_number() {
        let form = PredictionForm {
            ap_hi: "high".into(),
            ..filled()
        };
        let errors = form.parse().unwrap_err();
        assert_eq!(errors["ap_hi"], "ap_hi must be a number");
    }

    #[test]
    fn test_field_mut_covers_all_fields() {
        let mut form = PredictionForm::default();
        for name in [
            "age", "gender", "height", "weight", "ap_hi", "ap_lo", "cholesterol", "gluc", "smoke",
            "alco", "active",
        ] {
            *form.field_mut(name).unwrap() = "1".into();
        }
        assert!(form.field_mut("bogus").is_none());
        assert_eq!(form.field("gluc"), Some("1"));
        assert_eq!(form.parse().unwrap_err().len(), 2); // height and weight out of range
    }
}
