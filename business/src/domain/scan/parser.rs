use serde_json::Value;

use super::category::ScanCategory;
use super::errors::ScanError;
use super::model::{ParsedScan, ScanDetails};

/// Summary used when none of the headline fields is present.
pub const FALLBACK_SUMMARY: &str = "Resultado do Scan";

/// Removes markdown code fences (```json and ```) wherever they appear.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Turns raw provider text into a summary plus details.
///
/// Fails with [`ScanError::Parse`] unless the cleaned text is a JSON object.
pub fn parse_scan_response(raw: &str, category: ScanCategory) -> Result<ParsedScan, ScanError> {
    let cleaned = strip_code_fences(raw);

    let value: Value =
        serde_json::from_str(cleaned.trim()).map_err(|e| ScanError::parse(e.to_string()))?;

    let Value::Object(fields) = value else {
        return Err(ScanError::parse("response is not a JSON object"));
    };

    let details = ScanDetails::from(fields);
    let summary = derive_summary(&details, category);

    Ok(ParsedScan { summary, details })
}

/// First present headline field for the category, or the fallback literal.
pub fn derive_summary(details: &ScanDetails, category: ScanCategory) -> String {
    category
        .summary_fields()
        .into_iter()
        .find_map(|field| details.get(field).and_then(|value| value.as_headline()))
        .unwrap_or_else(|| FALLBACK_SUMMARY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::model::DetailValue;
    use proptest::prelude::*;

    const VEHICLE_RESPONSE: &str = r#"{"dano_detectado":"dented bumper","pecas_afetadas":["bumper"],"nivel_urgencia":"Médio","estimativa_custo_reparo_brl":1200,"acoes_recomendadas":"repair"}"#;

    #[test]
    fn should_parse_vehicle_response() {
        let parsed = parse_scan_response(VEHICLE_RESPONSE, ScanCategory::Vehicle).unwrap();

        assert_eq!(parsed.summary, "dented bumper");
        assert_eq!(
            parsed.details.get("nivel_urgencia"),
            Some(&DetailValue::Text("Médio".to_string()))
        );
        assert_eq!(parsed.details.len(), 5);
    }

    #[test]
    fn should_parse_fenced_response_like_unfenced() {
        let fenced = format!("```json\n{VEHICLE_RESPONSE}\n```");

        let plain = parse_scan_response(VEHICLE_RESPONSE, ScanCategory::Vehicle).unwrap();
        let from_fenced = parse_scan_response(&fenced, ScanCategory::Vehicle).unwrap();

        assert_eq!(plain, from_fenced);
    }

    #[test]
    fn should_strip_fences_in_the_middle_of_text() {
        let text = r#"{"nome_prato": ```"Pizza"```}"#;
        let parsed = parse_scan_response(text, ScanCategory::Food).unwrap();
        assert_eq!(parsed.summary, "Pizza");
    }

    #[test]
    fn should_parse_empty_object_into_empty_details() {
        let parsed = parse_scan_response("{}", ScanCategory::Object).unwrap();

        assert!(parsed.details.is_empty());
        assert_eq!(parsed.summary, FALLBACK_SUMMARY);
    }

    #[test]
    fn should_fail_on_malformed_json() {
        let result = parse_scan_response("{\"nome_prato\": ", ScanCategory::Food);
        assert!(matches!(result, Err(ScanError::Parse { .. })));
    }

    #[test]
    fn should_fail_on_empty_text() {
        let result = parse_scan_response("```json\n```", ScanCategory::Food);
        assert!(matches!(result, Err(ScanError::Parse { .. })));
    }

    #[test]
    fn should_fail_when_response_is_not_an_object() {
        let result = parse_scan_response("[1, 2, 3]", ScanCategory::Document);
        assert!(matches!(result, Err(ScanError::Parse { .. })));
    }

    #[test]
    fn should_use_purpose_summary_when_it_is_the_only_field() {
        for category in ScanCategory::ALL {
            let parsed =
                parse_scan_response(r#"{"resumo_proposito":"Contrato de aluguel"}"#, category)
                    .unwrap();
            assert_eq!(parsed.summary, "Contrato de aluguel");
        }
    }

    #[test]
    fn should_use_fallback_when_no_known_field_present() {
        let parsed =
            parse_scan_response(r#"{"calorias_estimadas": 800}"#, ScanCategory::Food).unwrap();
        assert_eq!(parsed.summary, FALLBACK_SUMMARY);
    }

    #[test]
    fn should_prefer_category_headline_over_shared_fields() {
        let text = r#"{"resumo_proposito":"generic","nome_produto":"Kindle Paperwhite"}"#;

        let object = parse_scan_response(text, ScanCategory::Object).unwrap();
        let document = parse_scan_response(text, ScanCategory::Document).unwrap();

        assert_eq!(object.summary, "Kindle Paperwhite");
        assert_eq!(document.summary, "generic");
    }

    #[test]
    fn should_skip_blank_headline_values() {
        let text = r#"{"nome_prato":"  ","resumo_proposito":"Almoço leve"}"#;
        let parsed = parse_scan_response(text, ScanCategory::Food).unwrap();
        assert_eq!(parsed.summary, "Almoço leve");
    }

    #[test]
    fn should_use_document_type_before_shared_fields() {
        let text = r#"{"tipo_documento":"Nota fiscal","nome_produto":"Cadeira"}"#;
        let parsed = parse_scan_response(text, ScanCategory::Document).unwrap();
        assert_eq!(parsed.summary, "Nota fiscal");
    }

    fn json_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-zA-Z0-9 çãé]{0,12}".prop_map(Value::String),
        ]
    }

    fn json_value() -> impl Strategy<Value = Value> {
        json_leaf().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec(("[a-z_]{1,8}", inner), 0..4)
                    .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
            ]
        })
    }

    fn json_object() -> impl Strategy<Value = String> {
        prop::collection::vec(("[a-z_]{1,10}", json_value()), 0..6).prop_map(|pairs| {
            Value::Object(pairs.into_iter().collect()).to_string()
        })
    }

    proptest! {
        #[test]
        fn stripping_fences_is_idempotent(text in ".{0,64}") {
            let once = strip_code_fences(&text);
            prop_assert_eq!(strip_code_fences(&once), once.clone());
        }

        #[test]
        fn fence_position_does_not_change_result(object in json_object(), split in 0usize..3) {
            let fenced = match split {
                0 => format!("```json{object}```"),
                1 => format!("```{object}```json"),
                _ => format!("{object}```"),
            };

            let plain = parse_scan_response(&object, ScanCategory::Document).unwrap();
            let from_fenced = parse_scan_response(&fenced, ScanCategory::Document).unwrap();

            prop_assert_eq!(plain, from_fenced);
        }

        #[test]
        fn details_survive_re_encoding(object in json_object()) {
            let first = parse_scan_response(&object, ScanCategory::Food).unwrap();
            let encoded = first.details.to_json().to_string();
            let second = parse_scan_response(&encoded, ScanCategory::Food).unwrap();

            prop_assert_eq!(first, second);
        }
    }
}
