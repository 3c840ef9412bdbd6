use super::category::ScanCategory;

/// Public description of one scanner offered to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerInfo {
    pub category: ScanCategory,
    pub title: &'static str,
    pub description: &'static str,
}

/// The scanners offered, one per category.
pub fn scanners() -> Vec<ScannerInfo> {
    ScanCategory::ALL.into_iter().map(scanner_for).collect()
}

pub fn scanner_for(category: ScanCategory) -> ScannerInfo {
    let (title, description) = match category {
        ScanCategory::Food => (
            "NutriScan",
            "Detalhamento instantâneo de calorias e macronutrientes a partir de uma foto da sua refeição.",
        ),
        ScanCategory::Vehicle => (
            "AutoDano",
            "Avaliação de danos via IA, identificação de peças e estimativa de custo de reparo.",
        ),
        ScanCategory::Document => (
            "DocResumo",
            "Resumo de documentos legais e comerciais com extração de entidades chave.",
        ),
        ScanCategory::Object => (
            "ItemFinder",
            "Identifique objetos, encontre fabricantes e compare preços de mercado instantaneamente.",
        ),
    };

    ScannerInfo {
        category,
        title,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_one_scanner_per_category_in_order() {
        let categories: Vec<ScanCategory> = scanners().into_iter().map(|s| s.category).collect();
        assert_eq!(categories, ScanCategory::ALL.to_vec());
    }

    #[test]
    fn should_name_vehicle_scanner() {
        assert_eq!(scanner_for(ScanCategory::Vehicle).title, "AutoDano");
    }
}
