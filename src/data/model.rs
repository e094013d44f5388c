use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

/// Athlete sex as recorded in the source data (`M` / `F`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse the source encoding; anything other than `M`/`F` is treated as
    /// missing.
    pub fn parse(s: &str) -> Option<Sex> {
        match s {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// Medal outcome of one event entry.  A row with no medal is `None` at the
/// `Participation` level, not a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn parse(s: &str) -> Option<Medal> {
        match s {
            "Gold" => Some(Medal::Gold),
            "Silver" => Some(Medal::Silver),
            "Bronze" => Some(Medal::Bronze),
            _ => None,
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Medal::Gold => write!(f, "Gold"),
            Medal::Silver => write!(f, "Silver"),
            Medal::Bronze => write!(f, "Bronze"),
        }
    }
}

// ---------------------------------------------------------------------------
// Participation – one unified row (athlete event ⟕ NOC lookup)
// ---------------------------------------------------------------------------

/// One Olympic participation, already left-joined with the NOC → region
/// lookup.  `region`/`notes` are `None` when the NOC had no lookup match;
/// the row itself is never dropped for that.
#[derive(Debug, Clone)]
pub struct Participation {
    pub id: i64,
    pub name: String,
    pub sex: Option<Sex>,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    /// Year + season composite label, e.g. "2000 Summer".
    pub games: Option<String>,
    pub year: Option<i32>,
    pub season: String,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
    /// Region name resolved from the NOC lookup table.
    pub region: Option<String>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// OlympicDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full unified dataset with pre-computed categorical indices used by
/// the prediction form.
#[derive(Debug, Clone)]
pub struct OlympicDataset {
    /// All participations (rows), in source order.
    pub records: Vec<Participation>,
    /// Sorted unique sports.
    pub sports: Vec<String>,
    /// Sorted unique resolved regions (unmatched NOCs contribute nothing).
    pub regions: Vec<String>,
}

impl OlympicDataset {
    /// Build the categorical indices from the joined rows.
    pub fn from_records(records: Vec<Participation>) -> Self {
        let mut sports: BTreeSet<String> = BTreeSet::new();
        let mut regions: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            if !rec.sport.is_empty() {
                sports.insert(rec.sport.clone());
            }
            if let Some(region) = &rec.region {
                regions.insert(region.clone());
            }
        }

        OlympicDataset {
            records,
            sports: sports.into_iter().collect(),
            regions: regions.into_iter().collect(),
        }
    }

    /// Number of participation rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parse_accepts_source_encoding_only() {
        assert_eq!(Sex::parse("M"), Some(Sex::Male));
        assert_eq!(Sex::parse("F"), Some(Sex::Female));
        assert_eq!(Sex::parse("male"), None);
        assert_eq!(Sex::parse(""), None);
    }

    #[test]
    fn medal_parse_matches_source_labels() {
        assert_eq!(Medal::parse("Gold"), Some(Medal::Gold));
        assert_eq!(Medal::parse("Silver"), Some(Medal::Silver));
        assert_eq!(Medal::parse("Bronze"), Some(Medal::Bronze));
        assert_eq!(Medal::parse("NA"), None);
    }

    #[test]
    fn dataset_indexes_unique_sports_and_regions() {
        let mut a = sample_row();
        a.sport = "Judo".to_string();
        a.region = Some("Japan".to_string());
        let mut b = sample_row();
        b.sport = "Judo".to_string();
        b.region = None;

        let ds = OlympicDataset::from_records(vec![a, b]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.sports, vec!["Judo".to_string()]);
        assert_eq!(ds.regions, vec!["Japan".to_string()]);
    }

    fn sample_row() -> Participation {
        Participation {
            id: 1,
            name: "A. Athlete".to_string(),
            sex: Some(Sex::Male),
            age: Some(24.0),
            height: Some(180.0),
            weight: Some(80.0),
            team: "Team".to_string(),
            noc: "JPN".to_string(),
            games: Some("2000 Summer".to_string()),
            year: Some(2000),
            season: "Summer".to_string(),
            city: "Sydney".to_string(),
            sport: "Judo".to_string(),
            event: "Judo Men's Middleweight".to_string(),
            medal: None,
            region: Some("Japan".to_string()),
            notes: None,
        }
    }
}
