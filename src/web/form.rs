use crate::domain::model::SurveyInput;
use axum::http::{header, HeaderMap};
use std::num::IntErrorKind;
use url::form_urlencoded;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Raw survey submission, one optional value per rating field.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SurveyForm {
    pub confidence: Option<String>,
    pub worry: Option<String>,
    pub human_skills: Option<String>,
}

impl SurveyForm {
    /// Reads the body as a urlencoded form when the request declares one.
    /// Any other content type leaves every field missing.
    pub fn from_request_parts(headers: &HeaderMap, body: &[u8]) -> Self {
        let is_form = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE));

        if !is_form {
            tracing::debug!("Submission is not a urlencoded form, treating all fields as missing");
            return Self::default();
        }
        Self::from_urlencoded(body)
    }

    /// First value wins when a key repeats.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self::default();
        for (key, value) in form_urlencoded::parse(body) {
            let slot = match key.as_ref() {
                "confidence" => &mut form.confidence,
                "worry" => &mut form.worry,
                "human_skills" => &mut form.human_skills,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        form
    }

    pub fn into_input(self) -> SurveyInput {
        SurveyInput {
            confidence: parse_rating("confidence", self.confidence.as_deref()),
            worry: parse_rating("worry", self.worry.as_deref()),
            human_skills: parse_rating("human_skills", self.human_skills.as_deref()),
        }
    }
}

/// Lenient integer parsing: missing or non-numeric values become 0 and
/// out-of-range values saturate. No range check against 1..=5.
pub fn parse_rating(field: &str, raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        tracing::debug!("Form field '{}' missing, using 0", field);
        return 0;
    };

    match raw.parse::<i64>() {
        Ok(value) => value,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                tracing::debug!("Form field '{}' is not an integer ({:?}), using 0", field, raw);
                0
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("confidence", Some("4")), 4);
        assert_eq!(parse_rating("confidence", Some("+2")), 2);
        assert_eq!(parse_rating("confidence", Some("-1")), -1);
        assert_eq!(parse_rating("confidence", Some("12")), 12);
    }

    #[test]
    fn test_bad_values_become_zero() {
        assert_eq!(parse_rating("worry", None), 0);
        assert_eq!(parse_rating("worry", Some("")), 0);
        assert_eq!(parse_rating("worry", Some("three")), 0);
        assert_eq!(parse_rating("worry", Some(" 3")), 0);
        assert_eq!(parse_rating("worry", Some("3.5")), 0);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(
            parse_rating("human_skills", Some("99999999999999999999")),
            i64::MAX
        );
        assert_eq!(
            parse_rating("human_skills", Some("-99999999999999999999")),
            i64::MIN
        );
    }

    #[test]
    fn test_form_into_input() {
        let form = SurveyForm {
            confidence: Some("5".to_string()),
            worry: Some("oops".to_string()),
            human_skills: None,
        };
        assert_eq!(form.into_input(), SurveyInput::new(5, 0, 0));
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let form = SurveyForm::from_urlencoded(b"confidence=5&confidence=1&worry=2&extra=x");
        assert_eq!(form.confidence.as_deref(), Some("5"));
        assert_eq!(form.worry.as_deref(), Some("2"));
        assert_eq!(form.human_skills, None);
    }

    #[test]
    fn test_urlencoded_values_are_decoded() {
        let form = SurveyForm::from_urlencoded(b"human_skills=%2B3&worry=1+");
        assert_eq!(form.into_input(), SurveyInput::new(0, 0, 3));
    }

    #[test]
    fn test_content_type_gates_parsing() {
        let body = b"confidence=4&worry=2&human_skills=3";

        let mut headers = HeaderMap::new();
        assert_eq!(SurveyForm::from_request_parts(&headers, body), SurveyForm::default());

        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert_eq!(SurveyForm::from_request_parts(&headers, body), SurveyForm::default());

        headers.insert(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded; charset=UTF-8".parse().unwrap(),
        );
        assert_eq!(
            SurveyForm::from_request_parts(&headers, body).into_input(),
            SurveyInput::new(4, 2, 3)
        );
    }
}
