//! Mission merge primitives.
//!
//! This crate defines the in-memory side of mizmerge:
//!
//! - [`Mission`] and friends — the mission document model (coalitions,
//!   countries, flying groups, units).
//! - [`countries`] — the static registry resolving country names to the
//!   simulator's identifiers.
//! - [`collect_client_flights`] — finds every group with a human slot,
//!   bucketed by coalition and country.
//! - [`country_conflicts`] — detects countries assigned to opposite
//!   coalitions in two missions.
//! - [`merge_client_flights`] — the merge itself: validate, extract, copy
//!   the destination, insert.
//!
//! File I/O lives in the `mizmerge-miz` crate; this crate never touches the
//! filesystem.
//!
//! # Example
//!
//! ```
//! use mizmerge_core::*;
//!
//! // A source mission with one client-occupied group under blue USA.
//! let mut source = Mission::new("alpha");
//! let mut usa = Country::new(2, "USA");
//! usa.add_flying_group(
//!     FlyingGroup::new(1, "Viper 1", GroupCategory::Airplane, "CAP")
//!         .with_unit(FlyingUnit::new("Viper 1-1", "F-16C_50", Skill::Client)),
//! );
//! source.coalition_mut(CoalitionTag::Blue).add_country(usa);
//!
//! // Merge into an empty destination: USA is created in the output.
//! let destination = Mission::new("bravo");
//! let outcome = merge_client_flights(&source, &destination).unwrap();
//! assert_eq!(outcome.countries_created, vec!["USA"]);
//! assert_eq!(outcome.mission.coalition(CoalitionTag::Blue).flying_group_count(), 1);
//! ```

pub mod countries;
pub mod extract;
pub mod merge;
pub mod types;
pub mod validate;

pub use countries::{CountryId, country_from_id, country_id_from_name, country_name_from_id};
pub use extract::{ClientFlightCollection, collect_client_flights};
pub use merge::{MergeError, MergeOutcome, merge_client_flights};
pub use types::{
    Coalition, CoalitionMap, CoalitionTag, Country, FlyingGroup, FlyingUnit, GroupCategory,
    MISSION_FORMAT_VERSION, Mission, Skill,
};
pub use validate::{CountryConflicts, country_conflicts};
