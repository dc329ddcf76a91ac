//! Assembly of the user-facing advice text.

use std::fmt::Write;

use super::templates::{disclaimer, dosage_label, heading, Section};
use crate::models::{KnowledgeRecord, Language, Medicine, PetSpecies, TreatmentRecommendation};

/// Maximum knowledge records listed in a response.
pub const MAX_LISTED_MATCHES: usize = 3;

/// Renders recommendations as markdown-style text.
#[derive(Debug, Clone, Default)]
pub struct ResponseComposer;

impl ResponseComposer {
    pub fn new() -> Self {
        Self
    }

    /// Compose the response. Empty sections are omitted; the disclaimer is always last.
    pub fn compose(
        &self,
        language: Language,
        species: PetSpecies,
        recommendation: &TreatmentRecommendation,
        matches: &[KnowledgeRecord],
        medicines: &[Medicine],
    ) -> String {
        let mut out = String::new();

        push_heading(&mut out, language, Section::Assessment);
        out.push_str(&recommendation.assessment);
        out.push_str("\n\n");

        push_list(&mut out, language, Section::PossibleCauses, &recommendation.possible_causes);
        push_list(&mut out, language, Section::Recommendations, &recommendation.recommendations);

        if !matches.is_empty() {
            push_heading(&mut out, language, Section::KnowledgeMatches);
            for record in matches.iter().take(MAX_LISTED_MATCHES) {
                let _ = writeln!(
                    out,
                    "- {} ({:.0}%): {}",
                    record.conditions.join(", "),
                    record.confidence * 100.0,
                    record.treatments.join(", ")
                );
            }
            out.push('\n');
        }

        if !medicines.is_empty() {
            push_heading(&mut out, language, Section::SuggestedMedicines);
            for medicine in medicines {
                let _ = write!(out, "- {}", medicine.name);
                if let Some(dosage) = medicine.dosage_for(species) {
                    let _ = write!(out, " ({} {})", dosage_label(language), dosage);
                }
                out.push('\n');
            }
            out.push('\n');
        }

        push_list(&mut out, language, Section::DietaryAdvice, &recommendation.dietary_advice);

        push_heading(&mut out, language, Section::WhenToSeeVet);
        out.push_str(&recommendation.when_to_see_vet);
        out.push_str("\n\n");

        out.push_str(disclaimer(language));
        out
    }
}

fn push_heading(out: &mut String, language: Language, section: Section) {
    let _ = writeln!(out, "**{}**", heading(language, section));
}

fn push_list(out: &mut String, language: Language, section: Section, items: &[String]) {
    if items.is_empty() {
        return;
    }
    push_heading(out, language, section);
    for item in items {
        let _ = writeln!(out, "- {}", item);
    }
    out.push('\n');
}
