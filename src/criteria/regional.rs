//! Regional price multipliers keyed by postcode area, plus the UK
//! postcode grammar check

use std::collections::HashMap;

/// Letters permitted in the final two positions of a UK postcode
/// (C, I, K, M, O and V are never used there)
const INWARD_LETTERS: &str = "ABDEFGHJLNPQRSTUWXYZ";

/// Check a string against the UK postcode grammar:
/// 1-2 letters, a digit (or R), an optional alphanumeric, then the inward
/// code of a digit and two letters from the restricted set. Spacing and
/// case are ignored.
pub fn is_valid_postcode(postcode: &str) -> bool {
    let compact: Vec<char> = postcode
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if !(5..=7).contains(&compact.len()) {
        return false;
    }

    let (outward, inward) = compact.split_at(compact.len() - 3);

    // Inward code: digit + two restricted letters
    if !inward[0].is_ascii_digit() {
        return false;
    }
    if !inward[1..].iter().all(|c| INWARD_LETTERS.contains(*c)) {
        return false;
    }

    // Outward code: [A-Z]{1,2}[0-9R][0-9A-Z]?
    if !outward[0].is_ascii_uppercase() {
        return false;
    }
    let district_start = if outward.len() > 1 && outward[1].is_ascii_uppercase() { 2 } else { 1 };

    match &outward[district_start..] {
        [d] => d.is_ascii_digit() || *d == 'R',
        [d, sub] => (d.is_ascii_digit() || *d == 'R') && sub.is_ascii_alphanumeric(),
        _ => false,
    }
}

/// The two-character area key used for regional lookups ("SW", "M1", ...)
pub fn postcode_area(postcode: &str) -> String {
    postcode
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .take(2)
        .collect()
}

/// Static postcode-area price multiplier table
///
/// Unlisted areas fall back to 1.0. This stands in for a live house-price
/// index; the market-trend enrichment the caller may layer on top does not
/// change the engine's arithmetic.
#[derive(Debug, Clone)]
pub struct RegionalMultipliers {
    multipliers: HashMap<&'static str, f64>,
}

impl Default for RegionalMultipliers {
    fn default() -> Self {
        Self::default_uk()
    }
}

impl RegionalMultipliers {
    /// Built-in UK table
    pub fn default_uk() -> Self {
        let mut multipliers = HashMap::new();

        // London
        multipliers.insert("SW", 1.8);
        multipliers.insert("W1", 2.2);
        multipliers.insert("WC", 2.0);
        multipliers.insert("EC", 1.9);
        multipliers.insert("E1", 1.6);
        multipliers.insert("N1", 1.4);
        multipliers.insert("NW", 1.5);
        multipliers.insert("SE", 1.3);
        multipliers.insert("CR", 1.2);
        multipliers.insert("BR", 1.1);

        // South East
        multipliers.insert("RH", 1.3);
        multipliers.insert("GU", 1.4);
        multipliers.insert("SL", 1.3);
        multipliers.insert("HP", 1.2);
        multipliers.insert("AL", 1.2);
        multipliers.insert("WD", 1.2);
        multipliers.insert("EN", 1.1);
        multipliers.insert("HA", 1.1);
        multipliers.insert("UB", 1.1);
        multipliers.insert("TW", 1.1);

        // Major cities
        multipliers.insert("M1", 0.7); // Manchester
        multipliers.insert("M2", 0.7);
        multipliers.insert("M3", 0.7);
        multipliers.insert("B1", 0.6); // Birmingham
        multipliers.insert("B2", 0.6);
        multipliers.insert("L1", 0.5); // Liverpool
        multipliers.insert("L2", 0.5);
        multipliers.insert("LS", 0.6); // Leeds
        multipliers.insert("S1", 0.5); // Sheffield
        multipliers.insert("NE", 0.5); // Newcastle
        multipliers.insert("EH", 0.8); // Edinburgh
        multipliers.insert("G1", 0.6); // Glasgow
        multipliers.insert("CF", 0.6); // Cardiff

        // Premium areas
        multipliers.insert("OX", 1.4); // Oxford
        multipliers.insert("CB", 1.3); // Cambridge
        multipliers.insert("BA", 1.0); // Bath
        multipliers.insert("BN", 1.1); // Brighton

        Self { multipliers }
    }

    /// Multiplier for a full postcode; unlisted areas return 1.0
    pub fn multiplier_for(&self, postcode: &str) -> f64 {
        let area = postcode_area(postcode);
        self.multipliers.get(area.as_str()).copied().unwrap_or(1.0)
    }
}
