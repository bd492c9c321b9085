//! Client-flight extraction.
//!
//! Scans a mission for flying groups containing at least one human slot and
//! buckets them by coalition, then country, preserving document order. The
//! source mission is only borrowed, so extraction can never modify it.

use indexmap::IndexMap;
use tracing::debug;

use crate::types::{CoalitionTag, FlyingGroup, Mission};

/// Client-occupied groups bucketed by coalition, then country name.
///
/// Built fresh per merge pass. The groups are borrowed from the source
/// mission and cloned only when inserted into an output document.
///
/// # Examples
///
/// ```
/// use mizmerge_core::{
///     collect_client_flights, CoalitionTag, Country, FlyingGroup, FlyingUnit, GroupCategory,
///     Mission, Skill,
/// };
///
/// let mut mission = Mission::new("demo");
/// let mut usa = Country::new(2, "USA");
/// usa.add_flying_group(
///     FlyingGroup::new(1, "Viper 1", GroupCategory::Airplane, "CAP")
///         .with_unit(FlyingUnit::new("Viper 1-1", "F-16C_50", Skill::Client)),
/// );
/// mission.coalition_mut(CoalitionTag::Blue).add_country(usa);
///
/// let flights = collect_client_flights(&mission);
/// assert_eq!(flights.group_count(), 1);
/// assert!(flights.for_tag(CoalitionTag::Blue).contains_key("USA"));
/// ```
#[derive(Debug, Default)]
pub struct ClientFlightCollection<'m> {
    blue: IndexMap<String, Vec<&'m FlyingGroup>>,
    red: IndexMap<String, Vec<&'m FlyingGroup>>,
}

impl<'m> ClientFlightCollection<'m> {
    /// The country buckets for one side.
    pub fn for_tag(&self, tag: CoalitionTag) -> &IndexMap<String, Vec<&'m FlyingGroup>> {
        match tag {
            CoalitionTag::Blue => &self.blue,
            CoalitionTag::Red => &self.red,
        }
    }

    fn for_tag_mut(&mut self, tag: CoalitionTag) -> &mut IndexMap<String, Vec<&'m FlyingGroup>> {
        match tag {
            CoalitionTag::Blue => &mut self.blue,
            CoalitionTag::Red => &mut self.red,
        }
    }

    /// Total number of collected groups across both sides.
    pub fn group_count(&self) -> usize {
        CoalitionTag::BOTH
            .iter()
            .map(|tag| self.for_tag(*tag).values().map(Vec::len).sum::<usize>())
            .sum()
    }

    /// Returns `true` when no client-occupied group was found.
    pub fn is_empty(&self) -> bool {
        self.blue.is_empty() && self.red.is_empty()
    }

    /// Iterates `(tag, country name, groups)` entries, blue side first, in
    /// collection order.
    pub fn entries(&self) -> impl Iterator<Item = (CoalitionTag, &str, &[&'m FlyingGroup])> {
        CoalitionTag::BOTH.into_iter().flat_map(move |tag| {
            self.for_tag(tag)
                .iter()
                .map(move |(name, groups)| (tag, name.as_str(), groups.as_slice()))
        })
    }
}

/// Collects every flying group with a human slot from `mission`.
///
/// Groups land under their owning coalition and country name in document
/// order. An empty collection is a normal outcome for missions without
/// client slots.
pub fn collect_client_flights(mission: &Mission) -> ClientFlightCollection<'_> {
    let mut flights = ClientFlightCollection::default();
    for tag in CoalitionTag::BOTH {
        for country in mission.coalition(tag).countries.values() {
            for group in country.flying_groups() {
                if group.has_human_unit() {
                    debug!(
                        coalition = %tag,
                        country = %country.name,
                        group = %group.name,
                        "collected client flight"
                    );
                    flights
                        .for_tag_mut(tag)
                        .entry(country.name.clone())
                        .or_default()
                        .push(group);
                }
            }
        }
    }
    flights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Country, FlyingUnit, GroupCategory, Skill};

    fn group(id: u32, name: &str, category: GroupCategory, skill: Skill) -> FlyingGroup {
        FlyingGroup::new(id, name, category, "CAP")
            .with_unit(FlyingUnit::new("Pilot", "F-16C_50", skill))
    }

    fn fixture_mission() -> Mission {
        let mut mission = Mission::new("extract fixture");

        let mut usa = Country::new(2, "USA");
        usa.add_flying_group(group(1, "Viper 1", GroupCategory::Airplane, Skill::Client));
        usa.add_flying_group(group(2, "Uzi 1", GroupCategory::Airplane, Skill::High));
        usa.add_flying_group(group(3, "Viper 2", GroupCategory::Airplane, Skill::Client));
        mission.coalition_mut(CoalitionTag::Blue).add_country(usa);

        let mut france = Country::new(5, "France");
        france.add_flying_group(group(4, "Mirage 1", GroupCategory::Airplane, Skill::Player));
        mission.coalition_mut(CoalitionTag::Blue).add_country(france);

        let mut russia = Country::new(0, "Russia");
        russia.add_flying_group(group(5, "Flanker 1", GroupCategory::Airplane, Skill::Excellent));
        russia.add_flying_group(group(6, "Hind 1", GroupCategory::Helicopter, Skill::Client));
        mission.coalition_mut(CoalitionTag::Red).add_country(russia);

        mission
    }

    #[test]
    fn test_collect_finds_exactly_the_human_groups() {
        let mission = fixture_mission();
        let flights = collect_client_flights(&mission);

        assert_eq!(flights.group_count(), 4);

        let blue = flights.for_tag(CoalitionTag::Blue);
        let usa_names: Vec<&str> = blue["USA"].iter().map(|g| g.name.as_str()).collect();
        assert_eq!(usa_names, vec!["Viper 1", "Viper 2"]);
        let france_names: Vec<&str> = blue["France"].iter().map(|g| g.name.as_str()).collect();
        assert_eq!(france_names, vec!["Mirage 1"]);

        let red = flights.for_tag(CoalitionTag::Red);
        let russia_names: Vec<&str> = red["Russia"].iter().map(|g| g.name.as_str()).collect();
        assert_eq!(russia_names, vec!["Hind 1"]);
    }

    #[test]
    fn test_collect_includes_helicopter_groups() {
        let mut mission = Mission::new("helo");
        let mut usa = Country::new(2, "USA");
        usa.add_flying_group(group(1, "Dustoff 1", GroupCategory::Helicopter, Skill::Client));
        mission.coalition_mut(CoalitionTag::Blue).add_country(usa);

        let flights = collect_client_flights(&mission);
        assert_eq!(flights.group_count(), 1);
        assert_eq!(flights.for_tag(CoalitionTag::Blue)["USA"][0].name, "Dustoff 1");
    }

    #[test]
    fn test_collect_does_not_touch_the_source() {
        let mission = fixture_mission();
        let before = mission.clone();

        let flights = collect_client_flights(&mission);
        assert!(!flights.is_empty());

        assert_eq!(mission, before);
    }

    #[test]
    fn test_collect_on_ai_only_mission_is_empty() {
        let mut mission = Mission::new("ai only");
        let mut russia = Country::new(0, "Russia");
        russia.add_flying_group(group(1, "Flanker 1", GroupCategory::Airplane, Skill::Good));
        mission.coalition_mut(CoalitionTag::Red).add_country(russia);

        let flights = collect_client_flights(&mission);
        assert!(flights.is_empty());
        assert_eq!(flights.group_count(), 0);
    }

    #[test]
    fn test_entries_iterates_blue_before_red_in_document_order() {
        let mission = fixture_mission();
        let flights = collect_client_flights(&mission);

        let order: Vec<(CoalitionTag, &str, usize)> = flights
            .entries()
            .map(|(tag, name, groups)| (tag, name, groups.len()))
            .collect();
        assert_eq!(
            order,
            vec![
                (CoalitionTag::Blue, "USA", 2),
                (CoalitionTag::Blue, "France", 1),
                (CoalitionTag::Red, "Russia", 1),
            ]
        );
    }
}
