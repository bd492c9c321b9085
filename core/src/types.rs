//! Mission document model.
//!
//! Defines the in-memory representation of a mission file: two mergeable
//! coalitions (plus a neutral roster that merge logic never touches), each
//! holding its countries in document order, each country holding its
//! fixed-wing and rotary-wing groups. All types round-trip through [`serde`]
//! and `Clone` is a full structural copy of the document graph.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::countries::CountryId;

/// Mission file format version understood by this crate.
pub const MISSION_FORMAT_VERSION: u32 = 1;

/// One of the two mergeable sides of a mission.
///
/// Extraction and merging iterate [`CoalitionTag::BOTH`] in fixed order.
/// Neutral countries cannot host client flights, so no neutral tag exists;
/// a mission's neutral roster is kept only for round-tripping (see
/// [`CoalitionMap::neutrals`]).
///
/// # Examples
///
/// ```
/// use mizmerge_core::CoalitionTag;
///
/// assert_eq!(CoalitionTag::Blue.name(), "blue");
/// assert_eq!(CoalitionTag::BOTH, [CoalitionTag::Blue, CoalitionTag::Red]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoalitionTag {
    Blue,
    Red,
}

impl CoalitionTag {
    /// Fixed iteration order for extraction and merge passes.
    pub const BOTH: [CoalitionTag; 2] = [CoalitionTag::Blue, CoalitionTag::Red];

    /// Lower-case side name as it appears in mission files.
    pub fn name(self) -> &'static str {
        match self {
            CoalitionTag::Blue => "blue",
            CoalitionTag::Red => "red",
        }
    }
}

impl std::fmt::Display for CoalitionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pilot skill assigned to a unit.
///
/// `Client` and `Player` are the human slots; the rest are AI levels.
///
/// # Examples
///
/// ```
/// use mizmerge_core::Skill;
///
/// assert!(Skill::Client.is_human());
/// assert!(Skill::Player.is_human());
/// assert!(!Skill::Excellent.is_human());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Skill {
    Average,
    #[default]
    Good,
    High,
    Excellent,
    Random,
    /// Multiplayer slot selectable by a human.
    Client,
    /// Single-player human slot.
    Player,
}

impl Skill {
    /// Returns `true` for slots controlled by a human.
    pub fn is_human(self) -> bool {
        matches!(self, Skill::Client | Skill::Player)
    }
}

/// Flying group category; selects the country list a group lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupCategory {
    Airplane,
    Helicopter,
}

/// A single aircraft within a [`FlyingGroup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyingUnit {
    pub name: String,
    /// Airframe type identifier (e.g. `F-16C_50`).
    #[serde(rename = "type")]
    pub unit_type: String,
    #[serde(default)]
    pub skill: Skill,
}

impl FlyingUnit {
    /// Creates a unit.
    pub fn new(name: impl Into<String>, unit_type: impl Into<String>, skill: Skill) -> Self {
        Self {
            name: name.into(),
            unit_type: unit_type.into(),
            skill,
        }
    }
}

/// An aircraft group: one or more units flying together under a single task.
///
/// # Examples
///
/// ```
/// use mizmerge_core::{FlyingGroup, FlyingUnit, GroupCategory, Skill};
///
/// let group = FlyingGroup::new(101, "Viper 1", GroupCategory::Airplane, "CAP")
///     .with_unit(FlyingUnit::new("Viper 1-1", "F-16C_50", Skill::Client))
///     .with_unit(FlyingUnit::new("Viper 1-2", "F-16C_50", Skill::High));
///
/// assert!(group.has_human_unit());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyingGroup {
    pub id: u32,
    pub name: String,
    pub category: GroupCategory,
    /// Primary task (e.g. `CAP`, `CAS`, `Transport`).
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub units: Vec<FlyingUnit>,
}

impl FlyingGroup {
    /// Creates an empty group.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: GroupCategory,
        task: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            task: task.into(),
            units: Vec::new(),
        }
    }

    /// Appends a unit.
    pub fn with_unit(mut self, unit: FlyingUnit) -> Self {
        self.units.push(unit);
        self
    }

    /// Returns `true` when at least one unit is a human slot.
    pub fn has_human_unit(&self) -> bool {
        self.units.iter().any(|unit| unit.skill.is_human())
    }
}

/// A country inside a coalition, holding its flying groups in document
/// order.
///
/// Fixed-wing and rotary-wing groups live in separate lists, mirroring the
/// mission editor's layout; [`flying_groups`](Country::flying_groups)
/// iterates both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    #[serde(default)]
    pub plane_groups: Vec<FlyingGroup>,
    #[serde(default)]
    pub helicopter_groups: Vec<FlyingGroup>,
}

impl Country {
    /// Creates a country with no groups.
    pub fn new(id: CountryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            plane_groups: Vec::new(),
            helicopter_groups: Vec::new(),
        }
    }

    /// Iterates every flying group, fixed-wing first, in document order.
    pub fn flying_groups(&self) -> impl Iterator<Item = &FlyingGroup> {
        self.plane_groups.iter().chain(self.helicopter_groups.iter())
    }

    /// Number of flying groups across both categories.
    pub fn flying_group_count(&self) -> usize {
        self.plane_groups.len() + self.helicopter_groups.len()
    }

    /// Attaches a group to the end of the list matching its category.
    pub fn add_flying_group(&mut self, group: FlyingGroup) {
        match group.category {
            GroupCategory::Airplane => self.plane_groups.push(group),
            GroupCategory::Helicopter => self.helicopter_groups.push(group),
        }
    }
}

/// One side's country roster, keyed by country name in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coalition {
    #[serde(default)]
    pub countries: IndexMap<String, Country>,
}

impl Coalition {
    /// Country names in document order.
    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Looks up a country by name.
    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.get(name)
    }

    /// Inserts a country keyed by its name, replacing any existing entry.
    pub fn add_country(&mut self, country: Country) {
        self.countries.insert(country.name.clone(), country);
    }

    /// Total flying groups across the roster.
    pub fn flying_group_count(&self) -> usize {
        self.countries.values().map(Country::flying_group_count).sum()
    }
}

/// The coalition block of a mission document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoalitionMap {
    #[serde(default)]
    pub blue: Coalition,
    #[serde(default)]
    pub red: Coalition,
    /// Neutral roster; round-tripped but never consulted by merge logic.
    #[serde(default)]
    pub neutrals: Coalition,
}

/// A full mission document.
///
/// `Clone` performs a structural deep copy of the entire document graph;
/// a mission and its clone share no state.
///
/// # Examples
///
/// ```
/// use mizmerge_core::{CoalitionTag, Country, Mission};
///
/// let mut mission = Mission::new("Red Flag 24-2");
/// mission
///     .coalition_mut(CoalitionTag::Blue)
///     .add_country(Country::new(2, "USA"));
///
/// assert!(mission.coalition(CoalitionTag::Blue).country("USA").is_some());
/// assert!(mission.coalition(CoalitionTag::Red).countries.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    #[serde(default = "default_format_version")]
    pub version: u32,
    #[serde(default = "default_theater")]
    pub theater: String,
    /// Mission title shown in the editor.
    #[serde(default)]
    pub sortie: String,
    /// Mission start, seconds after midnight.
    #[serde(default = "default_start_time")]
    pub start_time: u32,
    #[serde(default)]
    pub coalitions: CoalitionMap,
}

fn default_format_version() -> u32 {
    MISSION_FORMAT_VERSION
}

fn default_theater() -> String {
    "Caucasus".to_string()
}

fn default_start_time() -> u32 {
    28_800
}

impl Default for Mission {
    fn default() -> Self {
        Self {
            version: default_format_version(),
            theater: default_theater(),
            sortie: String::new(),
            start_time: default_start_time(),
            coalitions: CoalitionMap::default(),
        }
    }
}

impl Mission {
    /// Creates an empty mission on the default theater.
    pub fn new(sortie: impl Into<String>) -> Self {
        Self {
            sortie: sortie.into(),
            ..Self::default()
        }
    }

    /// The roster for one mergeable side.
    pub fn coalition(&self, tag: CoalitionTag) -> &Coalition {
        match tag {
            CoalitionTag::Blue => &self.coalitions.blue,
            CoalitionTag::Red => &self.coalitions.red,
        }
    }

    /// Mutable roster for one mergeable side.
    pub fn coalition_mut(&mut self, tag: CoalitionTag) -> &mut Coalition {
        match tag {
            CoalitionTag::Blue => &mut self.coalitions.blue,
            CoalitionTag::Red => &mut self.coalitions.red,
        }
    }
}
