//! Fish consumption guidance for methylmercury.
//!
//! Static advisory tissue levels (OEHHA, 2008) used for the scatter plot
//! overlay. Servings are 8 oz uncooked for a 160 lb adult.

use std::fmt;

/// FDA action level for mercury in commercial fish, ppm.
pub const FDA_ACTION_LEVEL_PPM: f64 = 1.0;

/// Population group an advisory table applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Population {
    /// Women 18–49 and children 1–17.
    #[default]
    Sensitive,
    /// Women 50 and older, men 18 and older.
    General,
}

impl Population {
    pub const ALL: [Population; 2] = [Population::Sensitive, Population::General];

    /// Advisory tiers, most permissive first.
    pub fn tiers(self) -> &'static [AdvisoryTier] {
        match self {
            Population::Sensitive => SENSITIVE_TIERS,
            Population::General => GENERAL_TIERS,
        }
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Population::Sensitive => write!(f, "Women 18–49, children 1–17"),
            Population::General => write!(f, "Women 50+, men 18+"),
        }
    }
}

/// Highest mercury level at which a weekly serving count is advised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryTier {
    pub servings_per_week: u8,
    pub max_ppm: f64,
}

const fn tier(servings_per_week: u8, max_ppm: f64) -> AdvisoryTier {
    AdvisoryTier {
        servings_per_week,
        max_ppm,
    }
}

const SENSITIVE_TIERS: &[AdvisoryTier] = &[
    tier(7, 0.031),
    tier(6, 0.036),
    tier(5, 0.044),
    tier(4, 0.055),
    tier(3, 0.070),
    tier(2, 0.150),
    tier(1, 0.440),
];

const GENERAL_TIERS: &[AdvisoryTier] = &[
    tier(7, 0.094),
    tier(6, 0.109),
    tier(5, 0.130),
    tier(4, 0.160),
    tier(3, 0.220),
    tier(2, 0.440),
    tier(1, 1.310),
];

/// Advised servings per week for fish at `mercury_ppm`; 0 means do not eat.
pub fn servings_per_week(mercury_ppm: f64, population: Population) -> u8 {
    population
        .tiers()
        .iter()
        .find(|t| mercury_ppm <= t.max_ppm)
        .map_or(0, |t| t.servings_per_week)
}
