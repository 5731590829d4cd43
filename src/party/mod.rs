use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of parties a tip covers. The serialized labels are the
/// ballot names and must match exactly between stored tips and entered
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Party {
    #[serde(rename = "SPD")]
    Spd,
    #[serde(rename = "CDU")]
    Cdu,
    #[serde(rename = "GRUENE")]
    Gruene,
    #[serde(rename = "FDP")]
    Fdp,
    #[serde(rename = "AfD")]
    Afd,
    #[serde(rename = "FREIE_WAEHLER")]
    FreieWaehler,
    #[serde(rename = "LINKE")]
    Linke,
}

impl Party {
    /// All parties in ballot order. Scoring and display iterate in this order.
    pub const ALL: [Party; 7] = [
        Party::Spd,
        Party::Cdu,
        Party::Gruene,
        Party::Fdp,
        Party::Afd,
        Party::FreieWaehler,
        Party::Linke,
    ];

    /// The serialized ballot label
    pub fn label(&self) -> &'static str {
        match self {
            Party::Spd => "SPD",
            Party::Cdu => "CDU",
            Party::Gruene => "GRUENE",
            Party::Fdp => "FDP",
            Party::Afd => "AfD",
            Party::FreieWaehler => "FREIE_WAEHLER",
            Party::Linke => "LINKE",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One predicted (or official) percentage per party.
///
/// Values are percentages in 0.0..=100.0 with one decimal place of intended
/// precision. A guess loaded from disk may be missing parties; completeness is
/// checked at scoring time, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guess(BTreeMap<Party, f64>);

impl Guess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, party: Party, percent: f64) {
        self.0.insert(party, percent);
    }

    /// Returns None when the party has no entry
    pub fn get(&self, party: Party) -> Option<f64> {
        self.0.get(&party).copied()
    }

    /// True when every party in [`Party::ALL`] has a value
    pub fn is_complete(&self) -> bool {
        Party::ALL.iter().all(|p| self.0.contains_key(p))
    }
}

impl FromIterator<(Party, f64)> for Guess {
    fn from_iter<I: IntoIterator<Item = (Party, f64)>>(iter: I) -> Self {
        Guess(iter.into_iter().collect())
    }
}
