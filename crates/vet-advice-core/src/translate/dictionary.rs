//! Veterinary term dictionaries used by the translator.

use crate::models::Language;

/// One term in all three languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub en: &'static str,
    pub lv: &'static str,
    pub ru: &'static str,
}

impl Term {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Lv => self.lv,
            Language::Ru => self.ru,
        }
    }
}

const fn term(en: &'static str, lv: &'static str, ru: &'static str) -> Term {
    Term { en, lv, ru }
}

pub const CONDITIONS: &[Term] = &[
    term("dermatitis", "dermatīts", "дерматит"),
    term("allergies", "alerģijas", "аллергии"),
    term("parasites", "parazīti", "паразиты"),
    term("gastroenteritis", "gastroenterīts", "гастроэнтерит"),
    term("pneumonia", "pneimonija", "пневмония"),
    term("urinary tract infection", "urīnceļu infekcija", "инфекция мочевыводящих путей"),
    term("kidney disease", "nieru slimība", "заболевание почек"),
    term("heart failure", "sirds mazspēja", "сердечная недостаточность"),
    term("diabetes", "diabēts", "диабет"),
    term("arthritis", "artrīts", "артрит"),
    term("cancer", "vēzis", "рак"),
    term("infection", "infekcija", "инфекция"),
];

pub const SYMPTOMS: &[Term] = &[
    term("hair loss", "matu izkrišana", "выпадение шерсти"),
    term("vomiting", "vemšana", "рвота"),
    term("diarrhea", "caureja", "диарея"),
    term("difficulty breathing", "elpošanas grūtības", "затрудненное дыхание"),
    term("frequent urination", "biežas urināšanas", "частое мочеиспускание"),
    term("lethargy", "letarģija", "вялость"),
    term("itching", "nieze", "зуд"),
    term("coughing", "klepus", "кашель"),
    term("loss of appetite", "apetītes zudums", "потеря аппетита"),
    term("fever", "drudzis", "лихорадка"),
    term("pain", "sāpes", "боль"),
    term("swelling", "pietūkums", "отек"),
    term("bleeding", "asiņošana", "кровотечение"),
];

pub const TREATMENTS: &[Term] = &[
    term("antibiotics", "antibiotikas", "антибиотики"),
    term("pain management", "sāpju pārvaldība", "обезболивание"),
    term("dietary changes", "uztura izmaiņas", "изменения в питании"),
    term("surgery", "ķirurģija", "хирургия"),
    term("medication", "medikamenti", "лекарства"),
    term("vaccination", "vakcinācija", "вакцинация"),
    term("therapy", "terapija", "терапия"),
    term("rest", "atpūta", "покой"),
    term("hydration", "hidratācija", "гидратация"),
];

pub const ANATOMY: &[Term] = &[
    term("eye", "acs", "глаз"),
    term("ear", "ausis", "ухо"),
    term("nose", "deguns", "нос"),
    term("mouth", "mute", "рот"),
    term("tooth", "zobs", "зуб"),
    term("skin", "āda", "кожа"),
    term("fur", "spalva", "шерсть"),
    term("paw", "ķepa", "лапа"),
    term("tail", "aste", "хвост"),
    term("stomach", "kuņģis", "желудок"),
    term("kidney", "niere", "почка"),
    term("liver", "aknas", "печень"),
    term("heart", "sirds", "сердце"),
    term("lung", "plaušas", "легкое"),
];

pub const PHRASES: &[Term] = &[
    term("my pet has", "manam mājdzīvniekam ir", "у моего питомца"),
    term("symptoms include", "simptomi ietver", "симптомы включают"),
    term("treatment options", "ārstēšanas iespējas", "варианты лечения"),
    term("consult veterinarian", "konsultējieties ar veterinārārstu", "обратитесь к ветеринару"),
    term("emergency care", "neatliekamā palīdzība", "неотложная помощь"),
    term("preventive care", "profilaktiskā aprūpe", "профилактический уход"),
    term("side effects", "blakusparādības", "побочные эффекты"),
    term("dosage", "deva", "дозировка"),
];

/// Extra vocabulary applied for `TranslationContext::Medical`.
pub const MEDICAL_CONTEXT: &[Term] = &[
    term("diagnosis", "diagnoze", "диагноз"),
    term("prognosis", "prognoze", "прогноз"),
    term("chronic", "hronisks", "хронический"),
    term("acute", "akūts", "острый"),
    term("severe", "smags", "тяжелый"),
    term("mild", "viegls", "легкий"),
    term("moderate", "vidējs", "умеренный"),
];

/// Intensity modifiers applied for `TranslationContext::Symptoms`.
pub const SYMPTOMS_CONTEXT: &[Term] = &[
    term("very", "ļoti", "очень"),
    term("extremely", "ārkārtīgi", "крайне"),
    term("slightly", "nedaudz", "слегка"),
    term("occasionally", "dažreiz", "иногда"),
    term("frequently", "bieži", "часто"),
    term("constantly", "pastāvīgi", "постоянно"),
];

/// Dosing phrases applied for `TranslationContext::Treatments`.
pub const TREATMENTS_CONTEXT: &[Term] = &[
    term("twice daily", "2 reizes dienā", "два раза в день"),
    term("three times daily", "3 reizes dienā", "три раза в день"),
    term("as needed", "pēc nepieciešamības", "по мере необходимости"),
    term("with food", "ar ēdienu", "с едой"),
    term("on empty stomach", "tukšā dūšā", "натощак"),
    term("topical application", "lokāla lietošana", "местное применение"),
];

/// Dictionaries applied to every translation, in order.
pub const BASE_DICTIONARIES: &[&[Term]] = &[CONDITIONS, SYMPTOMS, TREATMENTS, ANATOMY, PHRASES];

/// Dictionaries whose terms count as medical vocabulary for confidence scoring.
pub const MEDICAL_DICTIONARIES: &[&[Term]] = &[CONDITIONS, SYMPTOMS, TREATMENTS, ANATOMY];

/// Number of terms in the medical dictionaries.
pub fn medical_terms_count() -> usize {
    MEDICAL_DICTIONARIES.iter().map(|d| d.len()).sum()
}
