//! OpenStreetMap element identifiers in their short textual form (`n123`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Kind of OSM element an identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OsmCategory {
    Node,
    Way,
    Relation,
}

impl OsmCategory {
    pub fn letter(self) -> char {
        match self {
            OsmCategory::Node => 'n',
            OsmCategory::Way => 'w',
            OsmCategory::Relation => 'r',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'n' => Some(OsmCategory::Node),
            'w' => Some(OsmCategory::Way),
            'r' => Some(OsmCategory::Relation),
            _ => None,
        }
    }
}

/// Category plus numeric id, e.g. `n12162711342`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OsmId {
    pub category: OsmCategory,
    pub id: u64,
}

impl OsmId {
    pub const fn new(category: OsmCategory, id: u64) -> Self {
        Self { category, id }
    }

    pub const fn node(id: u64) -> Self {
        Self::new(OsmCategory::Node, id)
    }

    pub const fn way(id: u64) -> Self {
        Self::new(OsmCategory::Way, id)
    }

    pub const fn relation(id: u64) -> Self {
        Self::new(OsmCategory::Relation, id)
    }
}

impl FromStr for OsmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidOsmId(s.to_string());

        let mut chars = s.chars();
        let category = chars
            .next()
            .and_then(OsmCategory::from_letter)
            .ok_or_else(invalid)?;

        let digits = chars.as_str();
        // `u64::from_str` would also accept a leading '+'
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id = digits.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self { category, id })
    }
}

impl TryFrom<String> for OsmId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OsmId> for String {
    fn from(value: OsmId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for OsmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category.letter(), self.id)
    }
}
