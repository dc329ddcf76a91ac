//! Query analysis: language detection and symptom extraction.
//!
//! Pipeline: Language Detection → Keyword Extraction → Urgency → Category

mod language;
mod symptoms;

pub use language::*;
pub use symptoms::*;

use crate::models::{Language, SymptomAnalysis};

/// Coordinates the detector and extractor for one query.
#[derive(Default)]
pub struct SymptomAnalyzer {
    detector: LanguageDetector,
    extractor: SymptomExtractor,
}

impl SymptomAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze text in a known language.
    pub fn analyze(&self, text: &str, language: Language) -> SymptomAnalysis {
        let symptoms = self.extractor.extract(text, language);
        let urgency = assess_urgency(&symptoms);
        let category = categorize(&symptoms);

        tracing::debug!(
            language = %language,
            symptoms = symptoms.len(),
            urgency = urgency.as_str(),
            category = category.as_str(),
            "analyzed query"
        );

        SymptomAnalysis {
            symptoms,
            urgency,
            category,
        }
    }

    /// Detect the language, then analyze.
    pub fn analyze_auto(&self, text: &str) -> (Language, SymptomAnalysis) {
        let language = self.detector.detect(text);
        (language, self.analyze(text, language))
    }

    /// Get the detector for direct access.
    pub fn detector(&self) -> &LanguageDetector {
        &self.detector
    }

    /// Get the extractor for direct access.
    pub fn extractor(&self) -> &SymptomExtractor {
        &self.extractor
    }

    /// Mutable extractor access for registering keywords.
    pub fn extractor_mut(&mut self) -> &mut SymptomExtractor {
        &mut self.extractor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SymptomCategory, SymptomTag, Urgency};

    #[test]
    fn test_analyze_mixed_symptoms() {
        let analyzer = SymptomAnalyzer::new();
        let analysis = analyzer.analyze("My dog is itching and vomiting", Language::En);

        assert_eq!(analysis.symptoms, vec![SymptomTag::Vomiting, SymptomTag::Itching]);
        assert_eq!(analysis.urgency, Urgency::Emergency);
        assert_eq!(analysis.category, SymptomCategory::Skin);
    }

    #[test]
    fn test_analyze_nothing_recognised() {
        let analyzer = SymptomAnalyzer::new();
        let analysis = analyzer.analyze("sveiki", Language::Lv);

        assert!(analysis.is_empty());
        assert_eq!(analysis.urgency, Urgency::Low);
        assert_eq!(analysis.category, SymptomCategory::General);
    }

    #[test]
    fn test_analyze_auto_detects_russian() {
        let analyzer = SymptomAnalyzer::new();
        let (language, analysis) = analyzer.analyze_auto("Моя кошка кашляет");

        assert_eq!(language, Language::Ru);
        assert_eq!(analysis.symptoms, vec![SymptomTag::Coughing]);
        assert_eq!(analysis.category, SymptomCategory::Respiratory);
        assert_eq!(analysis.urgency, Urgency::Medium);
    }
}
