//! Built-in knowledge records loaded into an empty store.

use chrono::Utc;

use crate::models::{KnowledgeRecord, PetSpecies, Urgency};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The five curated records every knowledge base starts from.
pub fn seed_records() -> Vec<KnowledgeRecord> {
    let now = Utc::now();
    vec![
        KnowledgeRecord {
            id: "skin-issues-dogs".into(),
            symptoms: strings(&[
                "hair loss",
                "itching",
                "scratching",
                "red skin",
                "rash",
                "matu izkrišana",
                "nieze",
                "sarkana āda",
                "выпадение шерсти",
                "зуд",
                "красная кожа",
            ]),
            conditions: strings(&[
                "dermatitis",
                "allergies",
                "fungal infection",
                "bacterial infection",
                "parasites",
            ]),
            treatments: strings(&[
                "medicated shampoo",
                "topical antibiotics",
                "antihistamines",
                "dietary changes",
            ]),
            medicine_ids: strings(&[
                "chlorhexidine-shampoo",
                "ketoconazole-shampoo",
                "hydrocortisone-cream",
            ]),
            species: vec![PetSpecies::Dog, PetSpecies::Cat],
            urgency: Urgency::Medium,
            confidence: 0.9,
            sources: strings(&["veterinary-manual", "clinical-studies"]),
            last_updated: now,
        },
        KnowledgeRecord {
            id: "digestive-issues".into(),
            symptoms: strings(&[
                "vomiting",
                "diarrhea",
                "loss of appetite",
                "stomach pain",
                "vemšana",
                "caureja",
                "apetītes zudums",
                "рвота",
                "диарея",
                "потеря аппетита",
            ]),
            conditions: strings(&[
                "gastroenteritis",
                "food poisoning",
                "intestinal parasites",
                "dietary indiscretion",
            ]),
            treatments: strings(&["fasting", "bland diet", "probiotics", "fluid therapy"]),
            medicine_ids: strings(&[
                "omeprazole",
                "famotidine",
                "probiotics-paste",
                "digestive-enzymes",
            ]),
            species: vec![PetSpecies::Dog, PetSpecies::Cat, PetSpecies::Rabbit],
            urgency: Urgency::Medium,
            confidence: 0.85,
            sources: strings(&["veterinary-manual", "clinical-studies"]),
            last_updated: now,
        },
        KnowledgeRecord {
            id: "respiratory-emergency".into(),
            symptoms: strings(&[
                "difficulty breathing",
                "gasping",
                "blue gums",
                "collapse",
                "elpošanas grūtības",
                "zilganas smaganas",
                "затрудненное дыхание",
                "синие десны",
            ]),
            conditions: strings(&[
                "pneumonia",
                "heart failure",
                "airway obstruction",
                "allergic reaction",
            ]),
            treatments: strings(&[
                "immediate veterinary care",
                "oxygen therapy",
                "emergency medication",
            ]),
            medicine_ids: strings(&["emergency-contact"]),
            species: vec![
                PetSpecies::Dog,
                PetSpecies::Cat,
                PetSpecies::Bird,
                PetSpecies::Rabbit,
            ],
            urgency: Urgency::Emergency,
            confidence: 1.0,
            sources: strings(&["emergency-protocols"]),
            last_updated: now,
        },
        KnowledgeRecord {
            id: "urinary-issues-cats".into(),
            symptoms: strings(&[
                "frequent urination",
                "blood in urine",
                "straining",
                "litter box avoidance",
                "biežas urināšanas",
                "asinis urīnā",
                "частое мочеиспускание",
                "кровь в моче",
            ]),
            conditions: strings(&[
                "urinary tract infection",
                "bladder stones",
                "feline idiopathic cystitis",
            ]),
            treatments: strings(&[
                "increased water intake",
                "special diet",
                "antibiotics",
                "pain management",
            ]),
            medicine_ids: strings(&["cranberry-extract", "meloxicam", "amoxicillin"]),
            species: vec![PetSpecies::Cat],
            urgency: Urgency::High,
            confidence: 0.9,
            sources: strings(&["feline-medicine-textbook"]),
            last_updated: now,
        },
        KnowledgeRecord {
            id: "bird-respiratory".into(),
            symptoms: strings(&[
                "wheezing",
                "tail bobbing",
                "open mouth breathing",
                "discharge from nostrils",
                "elpošanas skaņas",
                "дыхание с открытым клювом",
            ]),
            conditions: strings(&[
                "respiratory infection",
                "air sac infection",
                "aspergillosis",
            ]),
            treatments: strings(&[
                "environmental humidity",
                "antifungal medication",
                "supportive care",
            ]),
            medicine_ids: strings(&["ketoconazole", "vitamin-a", "probiotics"]),
            species: vec![PetSpecies::Bird],
            urgency: Urgency::High,
            confidence: 0.8,
            sources: strings(&["avian-veterinary-manual"]),
            last_updated: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_records_are_valid() {
        let records = seed_records();
        assert_eq!(records.len(), 5);

        for record in &records {
            assert!(!record.species.is_empty(), "{} has no species", record.id);
            assert!((0.1..=1.0).contains(&record.confidence));
        }

        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
