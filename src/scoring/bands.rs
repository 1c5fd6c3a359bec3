use super::criteria::CriterionKind;

/// Which way a band scale runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandOrder {
    /// Smaller magnitudes score higher; edges are inclusive upper bounds
    AtMost,
    /// Larger magnitudes score higher; edges are inclusive lower bounds
    AtLeast,
}

/// Fixed piecewise scale mapping a raw magnitude to points in 1..=5.
///
/// `edges[0]` is the threshold for 5 points, `edges[3]` for 2 points.
/// Anything past the last edge scores 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub order: BandOrder,
    pub edges: [f64; 4],
}

pub const PRICE_BANDS: BandScale = BandScale {
    order: BandOrder::AtMost,
    edges: [500_000.0, 1_000_000.0, 1_500_000.0, 2_000_000.0],
};

pub const DISTANCE_BANDS: BandScale = BandScale {
    order: BandOrder::AtMost,
    edges: [0.5, 1.5, 3.0, 5.0],
};

pub const FACILITY_BANDS: BandScale = BandScale {
    order: BandOrder::AtLeast,
    edges: [8.0, 6.0, 4.0, 2.0],
};

pub const RATING_BANDS: BandScale = BandScale {
    order: BandOrder::AtLeast,
    edges: [4.5, 3.5, 2.5, 1.5],
};

pub const SECURITY_BANDS: BandScale = BandScale {
    order: BandOrder::AtLeast,
    edges: [8.0, 6.0, 4.0, 2.0],
};

impl BandScale {
    pub fn for_kind(kind: CriterionKind) -> &'static BandScale {
        match kind {
            CriterionKind::Price => &PRICE_BANDS,
            CriterionKind::Distance => &DISTANCE_BANDS,
            CriterionKind::Facility => &FACILITY_BANDS,
            CriterionKind::Rating => &RATING_BANDS,
            CriterionKind::Security => &SECURITY_BANDS,
        }
    }

    /// Points for `value`, always in 1..=5 and always "higher is better".
    pub fn points(&self, value: f64) -> u8 {
        for (i, edge) in self.edges.iter().enumerate() {
            let hit = match self.order {
                BandOrder::AtMost => value <= *edge,
                BandOrder::AtLeast => value >= *edge,
            };
            if hit {
                return 5 - i as u8;
            }
        }
        1
    }
}

/// Banded points for a raw attribute value.
pub fn points(kind: CriterionKind, value: f64) -> u8 {
    BandScale::for_kind(kind).points(value)
}
