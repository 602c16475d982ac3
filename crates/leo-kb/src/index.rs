//! The compiled ICF keyword index.
//!
//! Static reference data: one entry per ICF code with its trigger keywords
//! and the codes it is anatomically/functionally linked to. Loaded once,
//! never mutated. Several chapters carry a "Something else" placeholder
//! entry; these share a label but are distinct codes and are never merged.
//!
//! Keyword spellings (including the odd typo) are carried over from the
//! source survey data unchanged, since scoring matches them literally.

/// One row of the knowledge index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcfKnowledgeEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    /// Codes boosted when this entry and the related entry both qualify.
    pub related: &'static [&'static str],
}

/// The full index, in canonical table order (ties in the scorer preserve it).
pub const KB_INDEX: &[IcfKnowledgeEntry] = &[
    IcfKnowledgeEntry {
        code: "b114",
        label: "Orientation functions",
        keywords: &["orientatie", "plaats", "tijd"],
        related: &["d230", "d720", "d760"],
    },
    IcfKnowledgeEntry {
        code: "b130",
        label: "Energy and drive functions",
        keywords: &["drijfveren", "energie", "motivatie"],
        related: &["d230", "d720", "d760"],
    },
    IcfKnowledgeEntry {
        code: "b140",
        label: "Aandacht",
        keywords: &[
            "aandacht",
            "concentratie",
            "focus",
            "gaat",
            "heeft",
            "moeite",
            "onthouden",
            "vergeetachtig",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b152",
        label: "Emotionele functies",
        keywords: &[
            "angstig",
            "emotie",
            "emotioneel",
            "gevoelens",
            "heeft",
            "last",
            "sombere",
            "stemming",
            "verdrietig",
            "voelt",
            "vrolijk",
            "zich",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b1521",
        label: "Regulation of emotion",
        keywords: &[
            "emotion",
            "emotions",
            "problems",
            "regulation",
            "sensing",
            "showing",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b1522h",
        label: "Meaningfullness of life",
        keywords: &["life", "meaningfullness"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b189",
        label: "Understanding other peoples' feelings",
        keywords: &["feelings", "other", "peoples", "understanding"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b199z",
        label: "Something else",
        keywords: &["else", "something"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b210",
        label: "Seeing",
        keywords: &["problems", "seeing"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b230",
        label: "Hearing",
        keywords: &["hearing", "problems"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b280",
        label: "Sensation of pain",
        keywords: &["body", "ongemak", "pain", "part", "pijn", "sensatie"],
        related: &["d170", "d310", "d330"],
    },
    IcfKnowledgeEntry {
        code: "b299z",
        label: "Something else",
        keywords: &["else", "something"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b440",
        label: "Ademhalingsfuncties",
        keywords: &[
            "adem",
            "ademhaling",
            "benauwd",
            "buiten",
            "gaat",
            "hoesten",
            "kortademig",
            "snel",
            "wordt",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b455",
        label: "Inspanningstolerantie",
        keywords: &[
            "activiteiten",
            "energie",
            "energieniveau",
            "inspanning",
            "moe",
            "snel",
            "uitputting",
            "vermoeidheid",
            "wordt",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b710",
        label: "Mobility of joint functions",
        keywords: &[
            "beweging",
            "flexibiliteit",
            "gewrichten",
            "hypermobility",
            "joint",
            "movement",
            "movements",
            "restriction",
        ],
        related: &["d410", "d415", "d450", "d465"],
    },
    IcfKnowledgeEntry {
        code: "b730",
        label: "Spierkracht functies",
        keywords: &[
            "benen",
            "duwen",
            "heeft",
            "kracht",
            "moeite",
            "muscle",
            "power",
            "spierkracht",
            "tillen",
            "weakness",
            "zwakte",
        ],
        related: &["d410", "d415", "d450", "d465"],
    },
    IcfKnowledgeEntry {
        code: "b740",
        label: "Muscle resistance",
        keywords: &[
            "contraction",
            "muscle",
            "required",
            "resistance",
            "sustaining",
            "time",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b760",
        label: "Movement coordination",
        keywords: &[
            "control",
            "coordination",
            "movement",
            "movements",
            "voluntary",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b780",
        label: "Muscular sensation",
        keywords: &[
            "contractions",
            "heaviness",
            "muscles",
            "muscular",
            "sensation",
            "sensations",
            "spasms",
            "stiffness",
            "such",
            "tightness",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "b799z",
        label: "Something else",
        keywords: &["else", "something"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d170",
        label: "Writing",
        keywords: &["communicatie", "schrijven", "tekst"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d230",
        label: "Carrying out daily routine",
        keywords: &["dagelijkse", "planning", "routine"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d310",
        label: "Communicating with - receiving - spoken messages",
        keywords: &["begrijpen", "gesproken", "taal"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d330",
        label: "Speaking",
        keywords: &["communicatie", "spreken", "taal"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d410",
        label: "Changing body position",
        keywords: &["bed", "body", "changing", "position", "standing"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d415",
        label: "Maintaining a body position",
        keywords: &[
            "balans",
            "body",
            "lichaamshouding",
            "maintaining",
            "one",
            "position",
            "sitting",
            "standing",
        ],
        related: &["b710", "b730", "b760"],
    },
    IcfKnowledgeEntry {
        code: "d420",
        label: "Transferring oneself",
        keywords: &["oneself", "transferring"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d430",
        label: "Lifting and carrying objects",
        keywords: &[
            "carrying",
            "dífferent",
            "lifting",
            "object",
            "objects",
            "question",
            "raising",
            "sizes",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d440",
        label: "Fine hand use",
        keywords: &[
            "crasping",
            "fine",
            "hand",
            "manipulating",
            "objects",
            "picking",
            "use",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d445",
        label: "Hand and arm use",
        keywords: &[
            "arm",
            "catching",
            "hand",
            "pulling",
            "pushing",
            "reaching",
            "throwing",
            "turning",
            "use",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d450",
        label: "Lopen",
        keywords: &[
            "afstand",
            "assistive",
            "device",
            "evenwicht",
            "gaat",
            "gebruikt",
            "hulpmiddelen",
            "independently",
            "kunt",
            "lopen",
            "nog",
            "question",
            "rollator",
            "trap",
            "trappen",
            "walking",
            "wandelen",
        ],
        related: &["b710", "b730", "b760"],
    },
    IcfKnowledgeEntry {
        code: "d455",
        label: "Other moving",
        keywords: &[
            "climling",
            "jumping",
            "moving",
            "other",
            "question",
            "running",
            "stairs",
            "variable",
            "ways",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d4602",
        label: "Moving around in different locations",
        keywords: &[
            "around",
            "different",
            "locations",
            "moving",
            "new",
            "places",
            "routes",
            "situations",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d465",
        label: "Bewegen met hulpmiddelen",
        keywords: &[
            "around",
            "bewegen",
            "equipment",
            "gebruikt",
            "hulpmiddelen",
            "kunt",
            "mobiliteit",
            "moving",
            "nog",
            "rollator",
            "rolstoel",
            "skates",
            "skis",
            "using",
            "wheelchair",
            "zelf",
        ],
        related: &["b710", "b730", "b760"],
    },
    IcfKnowledgeEntry {
        code: "d470",
        label: "Using transportation",
        keywords: &["around", "moving", "passanger", "transportation", "using"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d475",
        label: "Rijden",
        keywords: &[
            "achter",
            "auto",
            "fietsen",
            "kunt",
            "nog",
            "rijden",
            "stuur",
            "veilig",
            "vervoer",
            "voelt",
            "zich",
        ],
        related: &["b710", "b730", "b760"],
    },
    IcfKnowledgeEntry {
        code: "d475a",
        label: "Driving",
        keywords: &["bike", "car", "driving", "vehicle"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d510",
        label: "Zichzelf wassen",
        keywords: &[
            "baden",
            "bathing",
            "body",
            "douchen",
            "drying",
            "goed",
            "heeft",
            "hulp",
            "hygiëne",
            "kunt",
            "nodig",
            "nog",
            "one",
            "oneself",
            "showering",
            "washing",
            "wassen",
            "whole",
            "zichzelf",
        ],
        related: &["b730", "b760", "s720", "s730"],
    },
    IcfKnowledgeEntry {
        code: "d520",
        label: "Caring for body parts",
        keywords: &[
            "aankleden",
            "after",
            "body",
            "caring",
            "face",
            "genitals",
            "goed",
            "hair",
            "heeft",
            "hulp",
            "kleren",
            "looking",
            "lukt",
            "mails",
            "nodig",
            "nog",
            "one",
            "parts",
            "persoonlijke",
            "schoenen",
            "skin",
            "teeth",
            "verzorging",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d530",
        label: "Toileting",
        keywords: &[
            "activities",
            "all",
            "includes",
            "related",
            "toilet",
            "toileting",
            "visit",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d540",
        label: "Aankleden",
        keywords: &[
            "aankleden",
            "clothes",
            "dressing",
            "dressinh",
            "heeft",
            "kleding",
            "knopen",
            "kunt",
            "moeite",
            "nog",
            "ritsen",
            "uitkleden",
            "undressing",
            "zichzelf",
        ],
        related: &["b730", "b760", "s720", "s730"],
    },
    IcfKnowledgeEntry {
        code: "d550",
        label: "Eten",
        keywords: &[
            "acceptale",
            "drinken",
            "eating",
            "eten",
            "having",
            "heeft",
            "kauwen",
            "kunt",
            "meals",
            "nog",
            "problemen",
            "using",
            "utensils",
            "voeding",
            "ways",
            "zelf",
        ],
        related: &["b730", "b760", "s720", "s730"],
    },
    IcfKnowledgeEntry {
        code: "d5701a",
        label: "Managing fitness",
        keywords: &[
            "after",
            "fitness",
            "health",
            "looking",
            "maintaining",
            "managing",
            "one",
            "physical",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d5701b",
        label: "Diet ",
        keywords: &[
            "after",
            "consuming",
            "diet",
            "foods",
            "health",
            "healthy",
            "looking",
            "one",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d5701c",
        label: "Weight maintenance",
        keywords: &["maintaining", "maintenance", "normal", "weight"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d5702b",
        label: "Smoking",
        keywords: &["cigarettes", "electronic", "smoking", "snuff"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d5702c",
        label: "Using alcohol",
        keywords: &["alcohol", "containg", "dringking", "drinks", "using"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d5702d",
        label: "Using other substances ",
        keywords: &["addictions", "drugs", "other", "substances", "using"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d5702f",
        label: "Self care",
        keywords: &["birth", "prevention"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d599z",
        label: "Something else",
        keywords: &["else", "something"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d620",
        label: "Question 4",
        keywords: &[
            "daily",
            "goods",
            "life",
            "needed",
            "procuring",
            "question",
            "selecting",
            "services",
            "shopping",
            "transporting",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d630",
        label: "Preparing meals",
        keywords: &[
            "boodschappen",
            "cooking",
            "eten",
            "gaat",
            "klaar",
            "koken",
            "maakt",
            "maaltijd",
            "maaltijden",
            "maken",
            "meals",
            "nog",
            "oneself",
            "organising",
            "others",
            "plannig",
            "preparing",
            "serving",
            "zelf",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d640",
        label: "Huishouden doen",
        keywords: &[
            "added",
            "already",
            "appliances",
            "cleaning",
            "clothes",
            "doen",
            "doing",
            "english",
            "functionmapper",
            "heeft",
            "household",
            "housework",
            "huishoudelijke",
            "huishouden",
            "hulp",
            "huosehold",
            "into",
            "kunt",
            "nodig",
            "nog",
            "promis",
            "question",
            "questions",
            "schoonmaken",
            "shore",
            "taken",
            "using",
            "washing",
        ],
        related: &["b730", "b760"],
    },
    IcfKnowledgeEntry {
        code: "d660",
        label: "Assisting others",
        keywords: &[
            "around",
            "assisting",
            "care",
            "familie",
            "helping",
            "hulp",
            "learning",
            "moving",
            "other",
            "others",
            "people",
            "supporting",
            "taking",
            "themselves",
            "verzorgen",
        ],
        related: &["b730", "b760"],
    },
    IcfKnowledgeEntry {
        code: "d710",
        label: "Basic interpersonal interactions",
        keywords: &[
            "acceptable",
            "acting",
            "basic",
            "contextually",
            "interactions",
            "interpersonal",
            "manner",
            "socially",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d720",
        label: "Social flexibility",
        keywords: &[
            "creating",
            "flexibility",
            "maintaining",
            "managing",
            "one",
            "relationships",
            "social",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d760",
        label: "Family relationships",
        keywords: &["family", "kinship", "maintaining", "relationships"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d770",
        label: "Intimate relationship",
        keywords: &[
            "close",
            "creating",
            "intimate",
            "maintaining",
            "relationship",
            "relationships",
            "romantic",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d7702",
        label: "Relationships and contacts",
        keywords: &["relationship", "sexual"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d799z",
        label: "Something else",
        keywords: &["else", "something", "someting"],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "d920",
        label: "d920",
        keywords: &[
            "activiteiten",
            "doet",
            "graag",
            "hobby",
            "leuke",
            "nog",
            "onderneemt",
            "ontspanning",
            "tijd",
            "uitgaan",
            "vrienden",
            "vrije",
            "wat",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "e110",
        label: "e110",
        keywords: &[
            "innemen",
            "lukt",
            "medicatie",
            "medicijnen",
            "neemt",
            "pillen",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "e115",
        label: "e115",
        keywords: &[
            "bril",
            "dagelijks",
            "gebruikt",
            "gehoorapparaat",
            "helpt",
            "hulpmiddelen",
            "leven",
            "rollator",
            "stok",
            "wat",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "e310",
        label: "e310",
        keywords: &[
            "familie",
            "hulp",
            "iemand",
            "kinderen",
            "krijgt",
            "ondersteuning",
            "partner",
            "samen",
            "woont",
        ],
        related: &[],
    },
    IcfKnowledgeEntry {
        code: "e355",
        label: "e355",
        keywords: &[
            "dokter",
            "fysiotherapeut",
            "hulp",
            "hulpverlening",
            "krijgt",
            "professionele",
            "welke",
            "ziet",
            "zorg",
            "zorgverleners",
        ],
        related: &[],
    },
];

/// Look up an index entry by code.
pub fn entry_by_code(code: &str) -> Option<&'static IcfKnowledgeEntry> {
    KB_INDEX.iter().find(|e| e.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = KB_INDEX.iter().map(|e| e.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(codes.len(), before);
    }

    #[test]
    fn placeholder_codes_stay_distinct() {
        // Five chapters carry a "Something else" row; all distinct codes.
        let placeholders: Vec<&str> = KB_INDEX
            .iter()
            .filter(|e| e.label == "Something else")
            .map(|e| e.code)
            .collect();
        assert_eq!(
            placeholders,
            vec!["b199z", "b299z", "b799z", "d599z", "d799z"]
        );
    }

    #[test]
    fn walking_entry_links_strength_and_coordination() {
        let d450 = entry_by_code("d450").unwrap();
        assert!(d450.related.contains(&"b730"));
        assert!(d450.keywords.contains(&"rollator"));
    }
}
