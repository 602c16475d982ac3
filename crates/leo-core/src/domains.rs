//! The nine A-PROOF dashboard domains and their display helpers.
//!
//! WHO-ICF severity scale: 0 = no problem, 4 = complete problem.
//! Exception: d450 uses the FAC scale (0-5) where HIGHER = MORE independent.

/// Static descriptor of one dashboard domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AproofDomain {
    pub code: &'static str,
    /// Dutch display name.
    pub name: &'static str,
    pub name_en: &'static str,
    /// A-PROOF repository tag.
    pub repo: &'static str,
    pub max_level: u8,
    /// Dashboard bar color (hex).
    pub color: &'static str,
    pub description: &'static str,
}

/// The nine A-PROOF domains, in dashboard order.
pub const APROOF_DOMAINS: [AproofDomain; 9] = [
    AproofDomain {
        code: "b1300",
        name: "Energie",
        name_en: "Energy level",
        repo: "ENR",
        max_level: 4,
        color: "#F59E0B",
        description: "Energieniveau en vermoeidheid",
    },
    AproofDomain {
        code: "b140",
        name: "Aandacht",
        name_en: "Attention functions",
        repo: "ATT",
        max_level: 4,
        color: "#8B5CF6",
        description: "Concentratie en aandachtsfuncties",
    },
    AproofDomain {
        code: "b152",
        name: "Emotioneel",
        name_en: "Emotional functions",
        repo: "STM",
        max_level: 4,
        color: "#EC4899",
        description: "Emotionele functies en stemming",
    },
    AproofDomain {
        code: "b440",
        name: "Ademhaling",
        name_en: "Respiration functions",
        repo: "ADM",
        max_level: 4,
        color: "#06B6D4",
        description: "Ademhalingsfuncties",
    },
    AproofDomain {
        code: "b455",
        name: "Inspanning",
        name_en: "Exercise tolerance",
        repo: "INS",
        max_level: 4,
        color: "#10B981",
        description: "Inspanningstolerantie",
    },
    AproofDomain {
        code: "b530",
        name: "Gewicht",
        name_en: "Weight maintenance",
        repo: "MBW",
        max_level: 4,
        color: "#F97316",
        description: "Gewichtshandhaving",
    },
    AproofDomain {
        code: "d450",
        name: "Lopen",
        name_en: "Walking",
        repo: "FAC",
        max_level: 5,
        color: "#3B82F6",
        description: "Lopen en mobiliteit (FAC)",
    },
    AproofDomain {
        code: "d550",
        name: "Eten",
        name_en: "Eating",
        repo: "ETN",
        max_level: 4,
        color: "#F43F5E",
        description: "Eten en voeding",
    },
    AproofDomain {
        code: "d840",
        name: "Werk",
        name_en: "Work and employment",
        repo: "BER",
        max_level: 4,
        color: "#64748B",
        description: "Werk en werkgelegenheid",
    },
];

/// Look up a dashboard domain by its ICF code.
pub fn domain_by_code(code: &str) -> Option<&'static AproofDomain> {
    APROOF_DOMAINS.iter().find(|d| d.code == code)
}

/// Dutch severity label for a qualifier level on the given code's scale.
pub fn severity_label(code: &str, level: u8, max_level: u8) -> &'static str {
    // FAC scale is inverted: 0 = cannot walk, 5 = fully independent.
    if code == crate::constants::FAC_CODE {
        let ratio = f64::from(level) / f64::from(max_level.max(1));
        return if ratio >= 0.8 {
            "Zelfstandig"
        } else if ratio >= 0.6 {
            "Toezicht nodig"
        } else if ratio >= 0.4 {
            "Steun nodig"
        } else if ratio >= 0.2 {
            "Continue hulp"
        } else {
            "Kan niet lopen"
        };
    }

    match level {
        0 => "Geen probleem",
        1 => "Licht probleem",
        2 => "Matig probleem",
        3 => "Ernstig probleem",
        _ => "Volledig probleem",
    }
}

/// Bar fill percentage for the dashboard, clamped to [0, 100].
pub fn level_percentage(level: u8, max_level: u8) -> f64 {
    if max_level == 0 {
        return 0.0;
    }
    (f64::from(level) / f64::from(max_level) * 100.0).clamp(0.0, 100.0)
}
