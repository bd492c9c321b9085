//! Coalition-compatibility validation.
//!
//! Before any merge work, both missions' full country rosters are checked
//! for countries that would have to switch sides. The check is independent
//! of which countries actually carry client flights.

use std::fmt;

use crate::types::{Coalition, Mission};

/// Countries whose coalition assignment differs between two missions.
///
/// Both directions come out of a single validation pass, so a caller sees
/// the complete picture at once instead of fixing one side and re-running.
///
/// # Examples
///
/// ```
/// use mizmerge_core::{country_conflicts, CoalitionTag, Country, Mission};
///
/// let mut source = Mission::new("alpha");
/// source
///     .coalition_mut(CoalitionTag::Blue)
///     .add_country(Country::new(2, "USA"));
///
/// let mut destination = Mission::new("bravo");
/// destination
///     .coalition_mut(CoalitionTag::Red)
///     .add_country(Country::new(2, "USA"));
///
/// let conflicts = country_conflicts(&source, &destination);
/// assert_eq!(conflicts.blue_to_red, vec!["USA"]);
/// assert!(conflicts.red_to_blue.is_empty());
/// assert!(!conflicts.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryConflicts {
    /// Blue in the source, red in the destination.
    pub blue_to_red: Vec<String>,
    /// Red in the source, blue in the destination.
    pub red_to_blue: Vec<String>,
}

impl CountryConflicts {
    /// Returns `true` when the two missions are compatible.
    pub fn is_empty(&self) -> bool {
        self.blue_to_red.is_empty() && self.red_to_blue.is_empty()
    }
}

impl fmt::Display for CountryConflicts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separate = false;
        if !self.blue_to_red.is_empty() {
            write!(
                f,
                "blue countries in the source are red in the destination: {}",
                self.blue_to_red.join(", ")
            )?;
            separate = true;
        }
        if !self.red_to_blue.is_empty() {
            if separate {
                write!(f, "; ")?;
            }
            write!(
                f,
                "red countries in the source are blue in the destination: {}",
                self.red_to_blue.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Computes the coalition-assignment conflicts between two missions.
///
/// Inspects the complete country roster of both documents. An empty result
/// means the missions can be merged.
pub fn country_conflicts(source: &Mission, destination: &Mission) -> CountryConflicts {
    CountryConflicts {
        blue_to_red: crossed(&source.coalitions.blue, &destination.coalitions.red),
        red_to_blue: crossed(&source.coalitions.red, &destination.coalitions.blue),
    }
}

fn crossed(side: &Coalition, opposite: &Coalition) -> Vec<String> {
    side.country_names()
        .filter(|name| opposite.countries.contains_key(*name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CoalitionTag, Country};

    fn mission(blue: &[&str], red: &[&str]) -> Mission {
        let mut mission = Mission::new("validate fixture");
        for name in blue {
            mission
                .coalition_mut(CoalitionTag::Blue)
                .add_country(Country::new(0, *name));
        }
        for name in red {
            mission
                .coalition_mut(CoalitionTag::Red)
                .add_country(Country::new(0, *name));
        }
        mission
    }

    #[test]
    fn test_compatible_missions_have_no_conflicts() {
        let source = mission(&["USA", "France"], &["Russia"]);
        let destination = mission(&["USA"], &["Russia", "Belarus"]);

        let conflicts = country_conflicts(&source, &destination);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_blue_country_red_in_destination_is_reported() {
        let source = mission(&["USA"], &[]);
        let destination = mission(&[], &["USA"]);

        let conflicts = country_conflicts(&source, &destination);
        assert_eq!(conflicts.blue_to_red, vec!["USA"]);
        assert!(conflicts.red_to_blue.is_empty());
    }

    #[test]
    fn test_both_directions_are_reported_together() {
        let source = mission(&["USA", "France"], &["Russia"]);
        let destination = mission(&["Russia"], &["USA"]);

        let conflicts = country_conflicts(&source, &destination);
        assert_eq!(conflicts.blue_to_red, vec!["USA"]);
        assert_eq!(conflicts.red_to_blue, vec!["Russia"]);
    }

    #[test]
    fn test_conflicts_cover_the_full_roster_not_just_client_countries() {
        // No groups at all in either mission; the roster alone conflicts.
        let source = mission(&["Georgia"], &[]);
        let destination = mission(&[], &["Georgia"]);

        assert!(!country_conflicts(&source, &destination).is_empty());
    }

    #[test]
    fn test_display_lists_both_directions() {
        let conflicts = CountryConflicts {
            blue_to_red: vec!["USA".to_string(), "France".to_string()],
            red_to_blue: vec!["Russia".to_string()],
        };
        let rendered = conflicts.to_string();
        assert!(rendered.contains("blue countries in the source are red in the destination: USA, France"));
        assert!(rendered.contains("red countries in the source are blue in the destination: Russia"));
    }
}
