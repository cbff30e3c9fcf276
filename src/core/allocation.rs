use crate::core::status::finite_or_zero;
use serde::{Deserialize, Serialize};

/// Display name for the synthetic upcoming item when several allocation
/// parts are rolled together.
pub const ALLOCATION_BUCKET_LABEL: &str = "Income sacrifice";

/// One named share of income set aside each period: savings, emergency
/// fund, investments, an allowance, or a custom pot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPart {
    name: String,
    amount: f64,
}

impl AllocationPart {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> f64 {
        finite_or_zero(self.amount)
    }
}

/// The plan's allocation parts for one period.
///
/// Parts with a blank name or a non-positive amount are carried in the
/// snapshot but ignored by every computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationPlan {
    parts: Vec<AllocationPart>,
}

impl AllocationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, amount: f64) {
        self.parts.push(AllocationPart::new(name, amount));
    }

    pub fn parts(&self) -> &[AllocationPart] {
        &self.parts
    }

    /// Parts that actually contribute: named, positive amounts.
    pub fn active_parts(&self) -> Vec<&AllocationPart> {
        self.parts
            .iter()
            .filter(|p| p.amount() > 0.0 && !p.name().trim().is_empty())
            .collect()
    }

    /// Sum of the active parts.
    pub fn total(&self) -> f64 {
        self.active_parts().iter().map(|p| p.amount()).sum()
    }

    /// Name for the single synthetic upcoming item: the part's own name
    /// when only one contributes, the umbrella label otherwise.
    pub fn bucket_name(&self) -> &str {
        let active = self.active_parts();
        match active.as_slice() {
            [single] => single.name(),
            _ => ALLOCATION_BUCKET_LABEL,
        }
    }
}

impl FromIterator<AllocationPart> for AllocationPlan {
    fn from_iter<T: IntoIterator<Item = AllocationPart>>(iter: T) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}
