use serde::{Deserialize, Serialize};

/// Headline fields shared by every category, in the order they are checked
/// after the category's own fields.
const SHARED_SUMMARY_FIELDS: [&str; 4] = [
    "resumo_proposito",
    "nome_prato",
    "nome_produto",
    "dano_detectado",
];

/// Analysis domain chosen when a scan is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanCategory {
    Food,
    Vehicle,
    Document,
    Object,
}

impl ScanCategory {
    pub const ALL: [ScanCategory; 4] = [
        ScanCategory::Food,
        ScanCategory::Vehicle,
        ScanCategory::Document,
        ScanCategory::Object,
    ];

    /// Fields that are most specific to this category's answer.
    fn headline_fields(&self) -> &'static [&'static str] {
        match self {
            ScanCategory::Food => &["nome_prato"],
            ScanCategory::Vehicle => &["dano_detectado"],
            ScanCategory::Document => &["resumo_proposito", "tipo_documento"],
            ScanCategory::Object => &["nome_produto"],
        }
    }

    /// Ordered field lookups used to derive a record summary.
    ///
    /// The category's headline fields come first, then the shared list,
    /// without repeating a field.
    pub fn summary_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = self.headline_fields().to_vec();
        for field in SHARED_SUMMARY_FIELDS {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }
}

impl std::fmt::Display for ScanCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanCategory::Food => write!(f, "FOOD"),
            ScanCategory::Vehicle => write!(f, "VEHICLE"),
            ScanCategory::Document => write!(f, "DOCUMENT"),
            ScanCategory::Object => write!(f, "OBJECT"),
        }
    }
}

impl std::str::FromStr for ScanCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOOD" => Ok(ScanCategory::Food),
            "VEHICLE" => Ok(ScanCategory::Vehicle),
            "DOCUMENT" => Ok(ScanCategory::Document),
            "OBJECT" => Ok(ScanCategory::Object),
            _ => Err(format!("Invalid scan category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_put_headline_field_first_for_each_category() {
        assert_eq!(ScanCategory::Food.summary_fields()[0], "nome_prato");
        assert_eq!(ScanCategory::Vehicle.summary_fields()[0], "dano_detectado");
        assert_eq!(ScanCategory::Document.summary_fields()[0], "resumo_proposito");
        assert_eq!(ScanCategory::Object.summary_fields()[0], "nome_produto");
    }

    #[test]
    fn should_not_repeat_fields_in_summary_order() {
        assert_eq!(
            ScanCategory::Document.summary_fields(),
            vec![
                "resumo_proposito",
                "tipo_documento",
                "nome_prato",
                "nome_produto",
                "dano_detectado",
            ]
        );
        assert_eq!(
            ScanCategory::Vehicle.summary_fields(),
            vec![
                "dano_detectado",
                "resumo_proposito",
                "nome_prato",
                "nome_produto",
            ]
        );
    }

    #[test]
    fn should_round_trip_through_display_and_from_str() {
        for category in ScanCategory::ALL {
            let parsed: ScanCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn should_reject_unknown_category() {
        assert!("food".parse::<ScanCategory>().is_err());
    }

    #[test]
    fn should_serialize_as_upper_case_name() {
        let json = serde_json::to_string(&ScanCategory::Vehicle).unwrap();
        assert_eq!(json, "\"VEHICLE\"");
    }
}
