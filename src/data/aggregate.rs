use std::collections::BTreeMap;

use super::model::{Medal, Participation, Sex};

// ---------------------------------------------------------------------------
// Result shapes
// ---------------------------------------------------------------------------

/// One (key, count) group of a counted view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub count: u64,
}

/// Per-year male/female counts for the gender histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGenderCount {
    pub year: i32,
    pub male: u64,
    pub female: u64,
}

/// Overall male/female participation totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenderTotals {
    pub male: u64,
    pub female: u64,
}

/// A (key, medal) counted view split into the three per-medal series.
#[derive(Debug, Clone, Default)]
pub struct MedalBreakdown {
    pub gold: Vec<GroupCount>,
    pub silver: Vec<GroupCount>,
    pub bronze: Vec<GroupCount>,
}

/// Placeholder key the source coerces missing grouping values to before
/// counting.  Kept literal for output parity with the original charts.
pub const MISSING_KEY: &str = "0";

// ---------------------------------------------------------------------------
// Gender views
// ---------------------------------------------------------------------------

/// Total male vs. female participation counts.  Rows whose sex did not
/// parse are excluded.
pub fn gender_totals(records: &[Participation]) -> GenderTotals {
    let mut totals = GenderTotals::default();
    for rec in records {
        match rec.sex {
            Some(Sex::Male) => totals.male += 1,
            Some(Sex::Female) => totals.female += 1,
            None => {}
        }
    }
    totals
}

/// Per-year, per-sex counts for the stacked gender histogram, ascending by
/// year.  Rows without a year or sex are skipped.
pub fn gender_by_year(records: &[Participation]) -> Vec<YearGenderCount> {
    let mut by_year: BTreeMap<i32, (u64, u64)> = BTreeMap::new();
    for rec in records {
        let (Some(year), Some(sex)) = (rec.year, rec.sex) else {
            continue;
        };
        let entry = by_year.entry(year).or_default();
        match sex {
            Sex::Male => entry.0 += 1,
            Sex::Female => entry.1 += 1,
        }
    }
    by_year
        .into_iter()
        .map(|(year, (male, female))| YearGenderCount { year, male, female })
        .collect()
}

// ---------------------------------------------------------------------------
// Single-key counted views
// ---------------------------------------------------------------------------

/// Participation counts per games label (year + season composite).
/// Missing labels are coerced to [`MISSING_KEY`] and counted, not dropped.
pub fn games_totals(records: &[Participation]) -> Vec<GroupCount> {
    count_by(records, |rec| {
        rec.games.clone().unwrap_or_else(|| MISSING_KEY.to_string())
    })
}

/// Participation counts per region, with the same missing-key coercion as
/// [`games_totals`].
pub fn region_totals(records: &[Participation]) -> Vec<GroupCount> {
    count_by(records, |rec| {
        rec.region.clone().unwrap_or_else(|| MISSING_KEY.to_string())
    })
}

/// Group every record by `key` and count.  Result is ascending by key,
/// which matches the original charts' ascending category axis.
fn count_by<F>(records: &[Participation], key: F) -> Vec<GroupCount>
where
    F: Fn(&Participation) -> String,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for rec in records {
        *counts.entry(key(rec)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-medal views
// ---------------------------------------------------------------------------

/// Medal counts per (region, medal), split into gold/silver/bronze series.
/// Rows without a medal are dropped before counting; so are rows whose NOC
/// resolved to no region, matching the original group-by semantics.
pub fn medals_by_region(records: &[Participation]) -> MedalBreakdown {
    medal_breakdown(records, |rec| rec.region.clone())
}

/// Medal counts per (sport, medal), split into gold/silver/bronze series.
pub fn medals_by_sport(records: &[Participation]) -> MedalBreakdown {
    medal_breakdown(records, |rec| Some(rec.sport.clone()))
}

fn medal_breakdown<F>(records: &[Participation], key: F) -> MedalBreakdown
where
    F: Fn(&Participation) -> Option<String>,
{
    let mut counts: BTreeMap<(String, Medal), u64> = BTreeMap::new();
    for rec in records {
        let Some(medal) = rec.medal else { continue };
        let Some(key) = key(rec) else { continue };
        *counts.entry((key, medal)).or_default() += 1;
    }

    let mut breakdown = MedalBreakdown::default();
    for ((key, medal), count) in counts {
        let series = match medal {
            Medal::Gold => &mut breakdown.gold,
            Medal::Silver => &mut breakdown.silver,
            Medal::Bronze => &mut breakdown.bronze,
        };
        series.push(GroupCount { key, count });
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::OlympicDataset;

    fn row(sex: &str, year: i32) -> Participation {
        Participation {
            id: 0,
            name: String::new(),
            sex: Sex::parse(sex),
            age: None,
            height: None,
            weight: None,
            team: String::new(),
            noc: "SWE".to_string(),
            games: Some(format!("{year} Summer")),
            year: Some(year),
            season: "Summer".to_string(),
            city: String::new(),
            sport: "Judo".to_string(),
            event: String::new(),
            medal: None,
            region: Some("Sweden".to_string()),
            notes: None,
        }
    }

    #[test]
    fn two_record_example_views() {
        let records = vec![row("M", 2000), row("F", 2000)];

        let totals = gender_totals(&records);
        assert_eq!(totals.male, 1);
        assert_eq!(totals.female, 1);

        let yearly = games_totals(&records);
        assert_eq!(yearly.len(), 1);
        assert_eq!(yearly[0].key, "2000 Summer");
        assert_eq!(yearly[0].count, 2);

        let by_year = gender_by_year(&records);
        assert_eq!(
            by_year,
            vec![YearGenderCount { year: 2000, male: 1, female: 1 }]
        );
    }

    #[test]
    fn gender_totals_sum_to_rows_with_parsed_sex() {
        let mut records = vec![row("M", 1996), row("F", 1996), row("F", 2000)];
        records.push(row("?", 2000)); // unparsable sex
        let totals = gender_totals(&records);
        assert_eq!(totals.male + totals.female, 3);
    }

    #[test]
    fn missing_games_label_is_coerced_not_dropped() {
        let mut a = row("M", 2000);
        a.games = None;
        let records = vec![a, row("F", 2000)];

        let groups = games_totals(&records);
        let total: u64 = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, records.len() as u64);
        assert!(groups.iter().any(|g| g.key == MISSING_KEY && g.count == 1));
    }

    #[test]
    fn unmatched_noc_counts_under_placeholder_region() {
        let mut stray = row("M", 2000);
        stray.noc = "ZZZ".to_string();
        stray.region = None;
        let records = vec![stray, row("F", 2000)];

        let groups = region_totals(&records);
        assert!(groups.iter().any(|g| g.key == MISSING_KEY && g.count == 1));
        assert!(groups.iter().any(|g| g.key == "Sweden" && g.count == 1));

        // The dataset itself keeps the row.
        let ds = OlympicDataset::from_records(records);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn medal_views_drop_medalless_rows() {
        let mut gold = row("M", 2000);
        gold.medal = Some(Medal::Gold);
        let mut silver = row("F", 2000);
        silver.medal = Some(Medal::Silver);
        silver.region = Some("France".to_string());
        silver.sport = "Fencing".to_string();
        let none = row("M", 2000); // medal = None

        let records = vec![gold, silver, none];

        let by_region = medals_by_region(&records);
        assert_eq!(by_region.gold, vec![GroupCount { key: "Sweden".into(), count: 1 }]);
        assert_eq!(by_region.silver, vec![GroupCount { key: "France".into(), count: 1 }]);
        assert!(by_region.bronze.is_empty());

        let by_sport = medals_by_sport(&records);
        assert_eq!(by_sport.gold[0].key, "Judo");
        assert_eq!(by_sport.silver[0].key, "Fencing");

        // No "no medal" group anywhere.
        let total: usize = by_region.gold.len() + by_region.silver.len() + by_region.bronze.len();
        assert_eq!(total, 2);
    }

    #[test]
    fn medal_by_region_skips_unresolved_regions() {
        let mut stray = row("M", 2000);
        stray.medal = Some(Medal::Bronze);
        stray.region = None;

        let by_region = medals_by_region(&[stray]);
        assert!(by_region.bronze.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_results() {
        let records: Vec<Participation> = Vec::new();
        assert_eq!(gender_totals(&records), GenderTotals::default());
        assert!(gender_by_year(&records).is_empty());
        assert!(games_totals(&records).is_empty());
        assert!(region_totals(&records).is_empty());
        assert!(medals_by_region(&records).gold.is_empty());
    }

    #[test]
    fn grouped_counts_are_ascending_by_key() {
        let mut a = row("M", 1996);
        a.region = Some("Zimbabwe".to_string());
        let b = row("F", 2000);
        let groups = region_totals(&[a, b]);
        assert_eq!(groups[0].key, "Sweden");
        assert_eq!(groups[1].key, "Zimbabwe");
    }
}
