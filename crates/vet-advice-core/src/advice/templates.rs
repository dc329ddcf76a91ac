//! Localized advice texts.

use crate::models::{Language, SymptomCategory, Urgency};

/// Canned texts for one category in one language.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTexts {
    pub assessment: &'static str,
    pub causes: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

/// Response section headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Assessment,
    PossibleCauses,
    Recommendations,
    KnowledgeMatches,
    SuggestedMedicines,
    DietaryAdvice,
    WhenToSeeVet,
}

pub fn category_texts(language: Language, category: SymptomCategory) -> CategoryTexts {
    match language {
        Language::Lv => latvian(category),
        Language::Ru => russian(category),
        Language::En => english(category),
    }
}

fn latvian(category: SymptomCategory) -> CategoryTexts {
    match category {
        SymptomCategory::Skin => CategoryTexts {
            assessment: "Pamatojoties uz aprakstītajiem simptomiem, iespējamas ādas problēmas.",
            causes: &[
                "Alerģiskas reakcijas",
                "Parazītu infekcijas",
                "Bakteriālas vai sēnīšu infekcijas",
                "Hormonu disbalanss",
                "Stress vai vides faktori",
            ],
            recommendations: &[
                "Uzturiet tīru un sausu dzīves vidi",
                "Izvairieties no zināmiem alerģēniem",
                "Lietojiet maigus šampūnus",
                "Novērojiet simptomu izmaiņas",
            ],
        },
        SymptomCategory::Digestive => CategoryTexts {
            assessment: "Aprakstītie simptomi liecina par iespējamām gremošanas sistēmas problēmām.",
            causes: &[
                "Nepareizs uzturs",
                "Pārtikas alerģijas",
                "Parazīti",
                "Infekcijas",
                "Stress",
            ],
            recommendations: &[
                "Īslaicīgs badošanās periods",
                "Pakāpeniska pāreja uz vieglu diētu",
                "Nodrošiniet pietiekamu šķidruma daudzumu",
                "Izvairieties no jaunas barības",
            ],
        },
        SymptomCategory::Respiratory => CategoryTexts {
            assessment: "Simptomi norāda uz iespējamām elpošanas sistēmas problēmām.",
            causes: &[
                "Alerģijas",
                "Infekcijas",
                "Ārējie kairinātāji",
                "Sirds problēmas",
                "Elpceļu obstrukcija",
            ],
            recommendations: &[
                "Nodrošiniet tīru gaisu",
                "Izvairieties no kairinātājiem",
                "Uzturiet mitrumu telpā",
                "Novērojiet elpošanas biežumu",
            ],
        },
        SymptomCategory::Urinary => CategoryTexts {
            assessment: "Aprakstītie simptomi var liecināt par urīnceļu problēmām.",
            causes: &[
                "Urīnceļu infekcijas",
                "Akmeņi",
                "Cistīts",
                "Nieru problēmas",
                "Hormonu izmaiņas",
            ],
            recommendations: &[
                "Palieliniet ūdens patēriņu",
                "Biežāk dodiet iespēju nokārtoties",
                "Specializēta diēta",
                "Uzturiet tīrību",
            ],
        },
        SymptomCategory::Behavioral => CategoryTexts {
            assessment: "Novērotās uzvedības izmaiņas var liecināt par dažādiem veselības jautājumiem.",
            causes: &[
                "Stress",
                "Slimības",
                "Vides izmaiņas",
                "Vecuma izmaiņas",
                "Sociālie faktori",
            ],
            recommendations: &[
                "Samaziniet stresa faktorus",
                "Nodrošiniet regulāru rutīnu",
                "Palieliniet fizisko aktivitāti",
                "Novērojiet izmaiņas",
            ],
        },
        SymptomCategory::General => CategoryTexts {
            assessment: "Nepieciešama sīkāka simptomu analīze, lai noteiktu precīzu diagnozi.",
            causes: &[
                "Dažādi faktori var ietekmēt mājdzīvnieka veselību",
                "Nepieciešama detalizētāka simptomu novērtēšana",
            ],
            recommendations: &[
                "Detalizēti aprakstiet visus novērotos simptomus",
                "Fiksējiet simptomu ilgumu un intensitāti",
                "Novērojiet ēšanas un dzeršanas paradumus",
            ],
        },
    }
}

fn russian(category: SymptomCategory) -> CategoryTexts {
    match category {
        SymptomCategory::Skin => CategoryTexts {
            assessment: "На основе описанных симптомов возможны проблемы с кожей.",
            causes: &[
                "Аллергические реакции",
                "Паразитарные инфекции",
                "Бактериальные или грибковые инфекции",
                "Гормональный дисбаланс",
                "Стресс или факторы окружающей среды",
            ],
            recommendations: &[
                "Поддерживайте чистую и сухую среду обитания",
                "Избегайте известных аллергенов",
                "Используйте мягкие шампуни",
                "Наблюдайте за изменениями симптомов",
            ],
        },
        SymptomCategory::Digestive => CategoryTexts {
            assessment: "Описанные симптомы указывают на возможные проблемы пищеварительной системы.",
            causes: &[
                "Неправильное питание",
                "Пищевые аллергии",
                "Паразиты",
                "Инфекции",
                "Стресс",
            ],
            recommendations: &[
                "Кратковременное голодание",
                "Постепенный переход на легкую диету",
                "Обеспечьте достаточное количество жидкости",
                "Избегайте нового корма",
            ],
        },
        SymptomCategory::Respiratory => CategoryTexts {
            assessment: "Симптомы указывают на возможные проблемы дыхательной системы.",
            causes: &[
                "Аллергии",
                "Инфекции",
                "Внешние раздражители",
                "Проблемы с сердцем",
                "Обструкция дыхательных путей",
            ],
            recommendations: &[
                "Обеспечьте чистый воздух",
                "Избегайте раздражителей",
                "Поддерживайте влажность в помещении",
                "Наблюдайте за частотой дыхания",
            ],
        },
        SymptomCategory::Urinary => CategoryTexts {
            assessment: "Описанные симптомы могут указывать на проблемы мочевыводящих путей.",
            causes: &[
                "Инфекции мочевыводящих путей",
                "Камни",
                "Цистит",
                "Проблемы с почками",
                "Гормональные изменения",
            ],
            recommendations: &[
                "Увеличьте потребление воды",
                "Чаще предоставляйте возможность справить нужду",
                "Специализированная диета",
                "Поддерживайте чистоту",
            ],
        },
        SymptomCategory::Behavioral => CategoryTexts {
            assessment: "Наблюдаемые изменения в поведении могут указывать на различные проблемы со здоровьем.",
            causes: &[
                "Стресс",
                "Болезни",
                "Изменения в окружающей среде",
                "Возрастные изменения",
                "Социальные факторы",
            ],
            recommendations: &[
                "Уменьшите стресс-факторы",
                "Обеспечьте регулярный режим",
                "Увеличьте физическую активность",
                "Наблюдайте за изменениями",
            ],
        },
        SymptomCategory::General => CategoryTexts {
            assessment: "Необходим более детальный анализ симптомов для точной диагностики.",
            causes: &[
                "Различные факторы могут влиять на здоровье питомца",
                "Необходима более детальная оценка симптомов",
            ],
            recommendations: &[
                "Детально опишите все наблюдаемые симптомы",
                "Зафиксируйте продолжительность и интенсивность симптомов",
                "Наблюдайте за привычками питания и питья",
            ],
        },
    }
}

fn english(category: SymptomCategory) -> CategoryTexts {
    match category {
        SymptomCategory::Skin => CategoryTexts {
            assessment: "Based on the described symptoms, skin problems are possible.",
            causes: &[
                "Allergic reactions",
                "Parasitic infections",
                "Bacterial or fungal infections",
                "Hormonal imbalance",
                "Stress or environmental factors",
            ],
            recommendations: &[
                "Maintain clean and dry living environment",
                "Avoid known allergens",
                "Use gentle shampoos",
                "Monitor symptom changes",
            ],
        },
        SymptomCategory::Digestive => CategoryTexts {
            assessment: "The described symptoms indicate possible digestive system problems.",
            causes: &[
                "Improper nutrition",
                "Food allergies",
                "Parasites",
                "Infections",
                "Stress",
            ],
            recommendations: &[
                "Short-term fasting",
                "Gradual transition to bland diet",
                "Ensure adequate fluid intake",
                "Avoid new food",
            ],
        },
        SymptomCategory::Respiratory => CategoryTexts {
            assessment: "Symptoms indicate possible respiratory system problems.",
            causes: &[
                "Allergies",
                "Infections",
                "External irritants",
                "Heart problems",
                "Airway obstruction",
            ],
            recommendations: &[
                "Provide clean air",
                "Avoid irritants",
                "Maintain room humidity",
                "Monitor breathing rate",
            ],
        },
        SymptomCategory::Urinary => CategoryTexts {
            assessment: "The described symptoms may indicate urinary tract problems.",
            causes: &[
                "Urinary tract infections",
                "Stones",
                "Cystitis",
                "Kidney problems",
                "Hormonal changes",
            ],
            recommendations: &[
                "Increase water intake",
                "Provide frequent bathroom opportunities",
                "Specialized diet",
                "Maintain cleanliness",
            ],
        },
        SymptomCategory::Behavioral => CategoryTexts {
            assessment: "Observed behavioral changes may indicate various health issues.",
            causes: &[
                "Stress",
                "Illness",
                "Environmental changes",
                "Age-related changes",
                "Social factors",
            ],
            recommendations: &[
                "Reduce stress factors",
                "Provide regular routine",
                "Increase physical activity",
                "Monitor changes",
            ],
        },
        SymptomCategory::General => CategoryTexts {
            assessment: "More detailed symptom analysis is needed for accurate diagnosis.",
            causes: &[
                "Various factors can affect pet health",
                "More detailed symptom assessment needed",
            ],
            recommendations: &[
                "Describe all observed symptoms in detail",
                "Record symptom duration and intensity",
                "Monitor eating and drinking habits",
            ],
        },
    }
}

/// Advice on when to see a vet for an urgency level.
pub fn when_to_see_vet(language: Language, urgency: Urgency) -> &'static str {
    match (language, urgency) {
        (Language::Lv, Urgency::Low) => "Novērojiet 24-48 stundas, ja simptomi nepasliktinās",
        (Language::Lv, Urgency::Medium) => "Konsultējieties ar veterinārārstu 1-2 dienu laikā",
        (Language::Lv, Urgency::High) => "Vērsieties pie veterinārārsta šodien",
        (Language::Lv, Urgency::Emergency) => "Nekavējoties dodieties uz veterinārklīniku!",
        (Language::Ru, Urgency::Low) => "Наблюдайте 24-48 часов, если симптомы не ухудшаются",
        (Language::Ru, Urgency::Medium) => "Проконсультируйтесь с ветеринаром в течение 1-2 дней",
        (Language::Ru, Urgency::High) => "Обратитесь к ветеринару сегодня",
        (Language::Ru, Urgency::Emergency) => "Немедленно обратитесь в ветеринарную клинику!",
        (Language::En, Urgency::Low) => "Monitor for 24-48 hours if symptoms don't worsen",
        (Language::En, Urgency::Medium) => "Consult with veterinarian within 1-2 days",
        (Language::En, Urgency::High) => "See veterinarian today",
        (Language::En, Urgency::Emergency) => "Go to veterinary clinic immediately!",
    }
}

/// Feeding advice for digestive cases.
pub fn digestive_diet(language: Language) -> &'static [&'static str] {
    match language {
        Language::Lv => &[
            "Viegla, viegli sagremojama barība",
            "Mazas porcijas biežāk",
            "Pietiekams ūdens daudzums",
        ],
        Language::Ru => &[
            "Легкая, легко усваиваемая пища",
            "Маленькие порции чаще",
            "Достаточное количество воды",
        ],
        Language::En => &[
            "Light, easily digestible food",
            "Small portions more frequently",
            "Adequate water supply",
        ],
    }
}

pub fn heading(language: Language, section: Section) -> &'static str {
    match (language, section) {
        (Language::Lv, Section::Assessment) => "NOVĒRTĒJUMS",
        (Language::Lv, Section::PossibleCauses) => "IESPĒJAMIE IEMESLI",
        (Language::Lv, Section::Recommendations) => "IETEIKUMI",
        (Language::Lv, Section::KnowledgeMatches) => "ZINĀŠANU BĀZES ATBILSTĪBAS",
        (Language::Lv, Section::SuggestedMedicines) => "IETEICAMIE PREPARĀTI",
        (Language::Lv, Section::DietaryAdvice) => "UZTURA IETEIKUMI",
        (Language::Lv, Section::WhenToSeeVet) => "KAD VĒRSTIES PIE VETERINĀRĀRSTA",
        (Language::Ru, Section::Assessment) => "ОЦЕНКА",
        (Language::Ru, Section::PossibleCauses) => "ВОЗМОЖНЫЕ ПРИЧИНЫ",
        (Language::Ru, Section::Recommendations) => "РЕКОМЕНДАЦИИ",
        (Language::Ru, Section::KnowledgeMatches) => "СОВПАДЕНИЯ В БАЗЕ ЗНАНИЙ",
        (Language::Ru, Section::SuggestedMedicines) => "РЕКОМЕНДУЕМЫЕ ПРЕПАРАТЫ",
        (Language::Ru, Section::DietaryAdvice) => "ДИЕТИЧЕСКИЕ РЕКОМЕНДАЦИИ",
        (Language::Ru, Section::WhenToSeeVet) => "КОГДА ОБРАТИТЬСЯ К ВЕТЕРИНАРУ",
        (Language::En, Section::Assessment) => "ASSESSMENT",
        (Language::En, Section::PossibleCauses) => "POSSIBLE CAUSES",
        (Language::En, Section::Recommendations) => "RECOMMENDATIONS",
        (Language::En, Section::KnowledgeMatches) => "KNOWLEDGE BASE MATCHES",
        (Language::En, Section::SuggestedMedicines) => "SUGGESTED MEDICINES",
        (Language::En, Section::DietaryAdvice) => "DIETARY ADVICE",
        (Language::En, Section::WhenToSeeVet) => "WHEN TO SEE A VET",
    }
}

/// Label preceding a per-species dosage line.
pub fn dosage_label(language: Language) -> &'static str {
    match language {
        Language::Lv => "Deva:",
        Language::Ru => "Дозировка:",
        Language::En => "Dosage:",
    }
}

/// Disclaimer appended to every response.
pub fn disclaimer(language: Language) -> &'static str {
    match language {
        Language::Lv => "**SVARĪGI**: Šī informācija ir tikai informatīviem nolūkiem un neaizstāj profesionālu veterinārārsta konsultāciju. Nopietnu simptomu gadījumā nekavējoties vērsieties pie speciālista!",
        Language::Ru => "**ВАЖНО**: Эта информация предназначена только для ознакомления и не заменяет профессиональную ветеринарную консультацию. При серьезных симптомах немедленно обратитесь к специалисту!",
        Language::En => "**IMPORTANT**: This information is for informational purposes only and does not replace professional veterinary consultation. For serious symptoms, contact a specialist immediately!",
    }
}
