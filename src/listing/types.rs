use serde::{Deserialize, Serialize};

use crate::scoring::{Alternative, Criterion, CriterionKind};

fn default_active() -> bool {
    true
}

/// A boarding-house listing as supplied by the listings file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub price: f64,    // Monthly rent, currency units
    pub distance: f64, // km to campus
    pub facility: f64, // 0-10
    pub rating: f64,   // 0-5
    pub security: f64, // 0-10
    /// Inactive listings are kept on file but never ranked
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Listing {
    pub fn value(&self, kind: CriterionKind) -> f64 {
        match kind {
            CriterionKind::Price => self.price,
            CriterionKind::Distance => self.distance,
            CriterionKind::Facility => self.facility,
            CriterionKind::Rating => self.rating,
            CriterionKind::Security => self.security,
        }
    }

    /// Value vector in `criteria` order.
    pub fn to_alternative(&self, criteria: &[Criterion]) -> Alternative {
        Alternative {
            id: self.id.clone(),
            values: criteria.iter().map(|c| self.value(c.id)).collect(),
        }
    }
}
