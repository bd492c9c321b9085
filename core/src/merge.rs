//! In-memory merge of client flights into a destination mission.
//!
//! The destination is never mutated: the output document starts as a full
//! structural copy and receives clones of the extracted groups. Validation
//! runs before the copy is even made, so a conflict can never produce a
//! partially merged document.

use indexmap::map::Entry;
use thiserror::Error;
use tracing::{debug, info};

use crate::countries::{country_from_id, country_id_from_name};
use crate::extract::collect_client_flights;
use crate::types::Mission;
use crate::validate::{CountryConflicts, country_conflicts};

/// Merge failures. Every variant is fatal to the invocation.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The two missions assign at least one country to opposite coalitions.
    #[error("incompatible coalition assignments between missions: {0}")]
    CountryConflict(CountryConflicts),

    /// An extracted country name has no entry in the country registry.
    #[error("no country definition for '{0}'")]
    UnknownCountry(String),
}

/// Result of a successful in-memory merge.
#[derive(Debug)]
pub struct MergeOutcome {
    /// The merged document: a copy of the destination plus client flights.
    pub mission: Mission,
    /// Number of flying groups attached to the output.
    pub groups_merged: usize,
    /// Countries created in the output because the destination had no entry
    /// for them, in insertion order.
    pub countries_created: Vec<String>,
}

/// Merges every client flight of `source` into a copy of `destination`.
///
/// Runs in a fixed order: validate coalition compatibility across both full
/// rosters, extract client flights from the source, copy the destination,
/// insert the flights (creating missing countries through the registry).
/// Groups keep their extraction order; a country already present under the
/// same coalition simply receives more groups.
///
/// # Examples
///
/// ```
/// use mizmerge_core::{
///     merge_client_flights, CoalitionTag, Country, FlyingGroup, FlyingUnit, GroupCategory,
///     Mission, Skill,
/// };
///
/// let mut source = Mission::new("alpha");
/// let mut usa = Country::new(2, "USA");
/// usa.add_flying_group(
///     FlyingGroup::new(1, "Viper 1", GroupCategory::Airplane, "CAP")
///         .with_unit(FlyingUnit::new("Viper 1-1", "F-16C_50", Skill::Client)),
/// );
/// source.coalition_mut(CoalitionTag::Blue).add_country(usa);
///
/// let destination = Mission::new("bravo");
/// let outcome = merge_client_flights(&source, &destination).unwrap();
///
/// assert_eq!(outcome.groups_merged, 1);
/// assert_eq!(outcome.countries_created, vec!["USA"]);
/// assert!(outcome.mission.coalition(CoalitionTag::Blue).country("USA").is_some());
/// ```
pub fn merge_client_flights(
    source: &Mission,
    destination: &Mission,
) -> Result<MergeOutcome, MergeError> {
    let conflicts = country_conflicts(source, destination);
    if !conflicts.is_empty() {
        return Err(MergeError::CountryConflict(conflicts));
    }

    let flights = collect_client_flights(source);
    let mut output = destination.clone();
    let mut groups_merged = 0usize;
    let mut countries_created = Vec::new();

    for (tag, country_name, groups) in flights.entries() {
        let coalition = output.coalition_mut(tag);
        let country = match coalition.countries.entry(country_name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let country = country_id_from_name(country_name)
                    .and_then(country_from_id)
                    .ok_or_else(|| MergeError::UnknownCountry(country_name.to_string()))?;
                debug!(coalition = %tag, country = country_name, "creating country in output");
                countries_created.push(country_name.to_string());
                entry.insert(country)
            }
        };
        for group in groups {
            country.add_flying_group((*group).clone());
            groups_merged += 1;
        }
    }

    info!(
        groups_merged,
        countries_created = countries_created.len(),
        "merged client flights"
    );

    Ok(MergeOutcome {
        mission: output,
        groups_merged,
        countries_created,
    })
}
