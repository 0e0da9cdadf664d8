use crate::config::{PAIRS, PairGroup};

/// One labelled group of selectable pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOptionGroup {
    pub label: &'static str,
    pub pairs: Vec<&'static str>,
}

/// The full option list of the pair selector: a synthetic "photo analysis"
/// entry followed by the static pair groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PairCatalog {
    pub photo_option: String,
    pub groups: Vec<PairOptionGroup>,
}

impl PairCatalog {
    /// Deterministic given the photo label, which is the only language-dependent entry.
    pub fn build(photo_label: &str) -> Self {
        Self::from_groups(photo_label, &PAIRS)
    }

    pub fn from_groups(photo_label: &str, groups: &[PairGroup]) -> Self {
        Self {
            photo_option: photo_label.to_string(),
            groups: groups
                .iter()
                .map(|g| PairOptionGroup {
                    label: g.label,
                    pairs: g.pairs.to_vec(),
                })
                .collect(),
        }
    }

    pub fn option_count(&self) -> usize {
        1 + self.groups.iter().map(|g| g.pairs.len()).sum::<usize>()
    }

    /// Value a freshly rebuilt select control falls back to
    pub fn first_value(&self) -> &str {
        &self.photo_option
    }

    pub fn contains(&self, value: &str) -> bool {
        self.photo_option == value
            || self
                .groups
                .iter()
                .any(|g| g.pairs.iter().any(|p| *p == value))
    }

    /// All option values in display order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.photo_option.as_str())
            .chain(self.groups.iter().flat_map(|g| g.pairs.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn always_fifty_three_options() {
        let catalog = PairCatalog::build("Photo analysis");
        assert_eq!(catalog.option_count(), 53);
        assert_eq!(catalog.values().count(), 53);

        let sizes: Vec<_> = catalog.groups.iter().map(|g| g.pairs.len()).collect();
        assert_eq!(sizes, vec![7, 36, 9]);
    }

    #[test]
    fn option_values_are_unique() {
        let catalog = PairCatalog::build("Photo analysis");
        let unique: HashSet<_> = catalog.values().collect();
        assert_eq!(unique.len(), catalog.option_count());
    }

    #[test]
    fn only_the_first_option_depends_on_the_label() {
        let en = PairCatalog::build("Photo analysis");
        let ru = PairCatalog::build("Анализ по фото");
        assert_eq!(en.first_value(), "Photo analysis");
        assert_eq!(ru.first_value(), "Анализ по фото");
        assert_eq!(en.groups, ru.groups);
        assert!(ru.contains("EUR/JPY OTC"));
        assert!(!ru.contains("Photo analysis"));
    }

    #[test]
    fn group_labels_are_fixed() {
        let labels: Vec<_> = PairCatalog::build("x").groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Main Pairs", "Other Pairs", "Pocket Option OTC"]);
    }
}
