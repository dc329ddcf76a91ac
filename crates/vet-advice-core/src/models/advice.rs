//! Treatment recommendation output.

use serde::{Deserialize, Serialize};

use super::{SymptomCategory, Urgency};

/// Canned, category-driven advice for one query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentRecommendation {
    pub category: SymptomCategory,
    pub assessment: String,
    pub possible_causes: Vec<String>,
    pub recommendations: Vec<String>,
    /// Medicine catalog ids; ids absent from the catalog are skipped when rendering
    pub suggested_medicine_ids: Vec<String>,
    pub dietary_advice: Vec<String>,
    pub when_to_see_vet: String,
    pub urgency: Urgency,
}
