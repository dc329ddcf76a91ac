//! Fuzzy name lookup for misspelled or partial medicine names.

use strsim::{jaro_winkler, normalized_levenshtein};

use super::MedicineCatalog;
use crate::models::{Medicine, MedicineMatch};

/// Minimum similarity to be reported as a match.
pub const MIN_SIMILARITY: f64 = 0.55;

impl MedicineCatalog {
    /// Rank medicines by name similarity to `name`, best first.
    ///
    /// Each medicine is compared under several spellings (full name, name
    /// without the parenthesised brand, the brand itself, and the id with
    /// hyphens as spaces); the best of them is its score.
    pub fn fuzzy_lookup(&self, name: &str, limit: usize) -> Vec<MedicineMatch> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut matches: Vec<MedicineMatch> = self
            .all()
            .iter()
            .filter_map(|m| {
                let score = name_variants(m)
                    .iter()
                    .map(|variant| fuzzy_match(&needle, variant))
                    .fold(0.0, f64::max);
                (score >= MIN_SIMILARITY).then(|| MedicineMatch {
                    id: m.id.clone(),
                    name: m.name.clone(),
                    score,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(limit);
        matches
    }
}

fn name_variants(medicine: &Medicine) -> Vec<String> {
    let name = medicine.name.to_lowercase();
    let mut variants = vec![medicine.id.replace('-', " ")];

    match (name.find('('), name.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            variants.push(name[..open].trim().to_string());
            variants.push(name[open + 1..close].trim().to_string());
        }
        _ => {}
    }
    variants.push(name);
    variants
}

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler favours shared prefixes, Levenshtein overall edit distance
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    jw * 0.6 + lev * 0.4
}
