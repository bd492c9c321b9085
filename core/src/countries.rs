//! Static registry of country definitions.
//!
//! Country names map to the simulator's numeric identifiers. The table is a
//! compile-time constant; the merge resolves names through it when the
//! destination mission has no entry for a country at all.

use crate::types::Country;

/// Numeric country identifier as used by the simulator.
pub type CountryId = u16;

/// `(id, name)` pairs for every known country definition, in identifier
/// order.
const COUNTRY_TABLE: &[(CountryId, &str)] = &[
    (0, "Russia"),
    (1, "Ukraine"),
    (2, "USA"),
    (3, "Turkey"),
    (4, "UK"),
    (5, "France"),
    (6, "Germany"),
    (7, "USAF Aggressors"),
    (8, "Canada"),
    (9, "Spain"),
    (10, "The Netherlands"),
    (11, "Belgium"),
    (12, "Norway"),
    (13, "Denmark"),
    (15, "Israel"),
    (16, "Georgia"),
    (17, "Insurgents"),
    (18, "Abkhazia"),
    (19, "South Ossetia"),
    (20, "Italy"),
    (21, "Australia"),
    (22, "Switzerland"),
    (23, "Austria"),
    (24, "Belarus"),
    (25, "Bulgaria"),
    (26, "Czech Republic"),
    (27, "China"),
    (28, "Croatia"),
    (29, "Egypt"),
    (30, "Finland"),
    (31, "Greece"),
    (32, "Hungary"),
    (33, "India"),
    (34, "Iran"),
    (35, "Iraq"),
    (36, "Ireland"),
    (37, "Japan"),
    (38, "Kazakhstan"),
    (39, "North Korea"),
    (40, "Pakistan"),
    (41, "Poland"),
    (42, "Romania"),
    (43, "Saudi Arabia"),
    (44, "Serbia"),
    (45, "Slovakia"),
    (46, "South Korea"),
    (47, "Sweden"),
    (48, "Syria"),
    (49, "Yemen"),
    (50, "Vietnam"),
    (51, "Venezuela"),
    (52, "Tunisia"),
    (53, "Thailand"),
    (54, "Sudan"),
    (55, "Philippines"),
    (56, "Morocco"),
    (57, "Mexico"),
    (58, "Malaysia"),
    (59, "Libya"),
    (60, "Jordan"),
    (61, "Indonesia"),
    (62, "Honduras"),
    (63, "Ethiopia"),
    (64, "Chile"),
    (65, "Brazil"),
    (66, "Bahrain"),
    (80, "Combined Joint Task Forces Blue"),
    (81, "Combined Joint Task Forces Red"),
    (82, "UN Peacekeepers"),
];

/// Resolves a country name to its identifier.
///
/// # Examples
///
/// ```
/// use mizmerge_core::countries::country_id_from_name;
///
/// assert_eq!(country_id_from_name("USA"), Some(2));
/// assert_eq!(country_id_from_name("Atlantis"), None);
/// ```
pub fn country_id_from_name(name: &str) -> Option<CountryId> {
    COUNTRY_TABLE
        .iter()
        .find(|(_, candidate)| *candidate == name)
        .map(|(id, _)| *id)
}

/// Resolves an identifier back to the canonical country name.
pub fn country_name_from_id(id: CountryId) -> Option<&'static str> {
    COUNTRY_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, name)| *name)
}

/// Constructs an empty [`Country`] for a known identifier.
///
/// # Examples
///
/// ```
/// use mizmerge_core::countries::country_from_id;
///
/// let usa = country_from_id(2).unwrap();
/// assert_eq!(usa.name, "USA");
/// assert_eq!(usa.flying_group_count(), 0);
/// ```
pub fn country_from_id(id: CountryId) -> Option<Country> {
    country_name_from_id(id).map(|name| Country::new(id, name))
}
