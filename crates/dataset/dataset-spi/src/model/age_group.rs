//! Maternal age group columns of the source table.

use serde::{Deserialize, Serialize};

/// A maternal age group column.
///
/// The labels match the source table headers exactly; ordering follows the
/// column order of the source table (youngest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Mothers under 20
    Under20,
    /// Mothers aged 20-29
    From20To29,
    /// Mothers aged 30-39
    From30To39,
    /// Mothers aged 40 and over
    Over40,
}

impl AgeGroup {
    /// Column label as it appears in the source table header.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Under20 => "<20",
            AgeGroup::From20To29 => "20-29",
            AgeGroup::From30To39 => "30-39",
            AgeGroup::Over40 => "40+",
        }
    }

    /// Look up an age group from its column label (exact match).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().find(|g| g.label() == label).copied()
    }

    /// All four age groups in canonical (column) order.
    pub fn all() -> &'static [AgeGroup] {
        &[
            AgeGroup::Under20,
            AgeGroup::From20To29,
            AgeGroup::From30To39,
            AgeGroup::Over40,
        ]
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(AgeGroup::Under20.label(), "<20");
        assert_eq!(AgeGroup::From20To29.label(), "20-29");
        assert_eq!(AgeGroup::From30To39.label(), "30-39");
        assert_eq!(AgeGroup::Over40.label(), "40+");
    }

    #[test]
    fn test_from_label() {
        for group in AgeGroup::all() {
            assert_eq!(AgeGroup::from_label(group.label()), Some(*group));
        }
        assert_eq!(AgeGroup::from_label("20–29"), None);
        assert_eq!(AgeGroup::from_label(""), None);
    }

    #[test]
    fn test_canonical_order() {
        let groups = AgeGroup::all();
        assert_eq!(groups.len(), 4);
        for pair in groups.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", AgeGroup::Over40), "40+");
    }
}
