use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Medal, OlympicDataset, Participation, Sex};

/// File names expected inside the data directory.
pub const ATHLETES_FILE: &str = "athlete_events.csv";
pub const REGIONS_FILE: &str = "noc_regions.csv";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the full dataset from a directory containing `athlete_events.csv`
/// and `noc_regions.csv`, left-joining on the NOC column.
///
/// All-or-nothing: any unreadable file or missing column aborts the load.
/// Every athlete row survives the join; rows whose NOC has no lookup entry
/// keep `region = None`.
pub fn load_dataset(data_dir: &Path) -> Result<OlympicDataset> {
    let lookup = load_region_lookup(&data_dir.join(REGIONS_FILE))?;
    let records = load_athletes(&data_dir.join(ATHLETES_FILE), &lookup)?;
    Ok(OlympicDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// NOC → region lookup
// ---------------------------------------------------------------------------

/// Region name and free-form notes for one NOC.
type RegionEntry = (Option<String>, Option<String>);

fn load_region_lookup(path: &Path) -> Result<HashMap<String, RegionEntry>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading NOC lookup headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let noc_idx = column_index(&headers, "NOC")
        .context("NOC lookup CSV missing 'NOC' column")?;
    let region_idx = column_index(&headers, "region")
        .context("NOC lookup CSV missing 'region' column")?;
    // Optional: some exports of the lookup table omit the notes column.
    let notes_idx = column_index(&headers, "notes");

    let mut lookup = HashMap::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("NOC lookup row {row_no}"))?;
        let noc = record.get(noc_idx).unwrap_or("").to_string();
        if noc.is_empty() {
            continue;
        }
        let region = opt_str(record.get(region_idx).unwrap_or(""));
        let notes = notes_idx.and_then(|i| opt_str(record.get(i).unwrap_or("")));
        lookup.insert(noc, (region, notes));
    }
    Ok(lookup)
}

// ---------------------------------------------------------------------------
// Athlete events
// ---------------------------------------------------------------------------

fn load_athletes(
    path: &Path,
    lookup: &HashMap<String, RegionEntry>,
) -> Result<Vec<Participation>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading athlete CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = |name: &str| {
        column_index(&headers, name)
            .with_context(|| format!("athlete CSV missing '{name}' column"))
    };

    let id_idx = col("ID")?;
    let name_idx = col("Name")?;
    let sex_idx = col("Sex")?;
    let age_idx = col("Age")?;
    let height_idx = col("Height")?;
    let weight_idx = col("Weight")?;
    let team_idx = col("Team")?;
    let noc_idx = col("NOC")?;
    let games_idx = col("Games")?;
    let year_idx = col("Year")?;
    let season_idx = col("Season")?;
    let city_idx = col("City")?;
    let sport_idx = col("Sport")?;
    let event_idx = col("Event")?;
    let medal_idx = col("Medal")?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("athlete CSV row {row_no}"))?;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let noc = field(noc_idx).to_string();
        let (region, notes) = match lookup.get(&noc) {
            Some((region, notes)) => (region.clone(), notes.clone()),
            None => (None, None),
        };

        records.push(Participation {
            id: field(id_idx).parse().unwrap_or(0),
            name: field(name_idx).to_string(),
            sex: Sex::parse(field(sex_idx)),
            age: opt_f64(field(age_idx)),
            height: opt_f64(field(height_idx)),
            weight: opt_f64(field(weight_idx)),
            team: field(team_idx).to_string(),
            noc,
            games: opt_str(field(games_idx)),
            year: opt_i32(field(year_idx)),
            season: field(season_idx).to_string(),
            city: field(city_idx).to_string(),
            sport: field(sport_idx).to_string(),
            event: field(event_idx).to_string(),
            medal: Medal::parse(field(medal_idx)),
            region,
            notes,
        });
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Cell parsing helpers – the source uses "NA" for missing values
// ---------------------------------------------------------------------------

fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn opt_str(s: &str) -> Option<String> {
    if s.is_empty() || s == "NA" {
        None
    } else {
        Some(s.to_string())
    }
}

fn opt_f64(s: &str) -> Option<f64> {
    opt_str(s).and_then(|v| v.parse().ok())
}

fn opt_i32(s: &str) -> Option<i32> {
    opt_str(s).and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("olympic-lens-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_sources(dir: &Path, athletes: &str, regions: &str) {
        fs::write(dir.join(ATHLETES_FILE), athletes).unwrap();
        fs::write(dir.join(REGIONS_FILE), regions).unwrap();
    }

    const HEADER: &str =
        "ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal\n";

    #[test]
    fn left_join_keeps_every_athlete_row() {
        let dir = fixture_dir("join");
        let athletes = format!(
            "{HEADER}\
             1,Alice,F,24,170,60,Sweden,SWE,2000 Summer,2000,Summer,Sydney,Judo,Event,Gold\n\
             2,Bob,M,30,NA,NA,Nowhere,ZZZ,2000 Summer,2000,Summer,Sydney,Judo,Event,NA\n"
        );
        let regions = "NOC,region,notes\nSWE,Sweden,\nFRA,France,\n";
        write_sources(&dir, &athletes, regions);

        let ds = load_dataset(&dir).unwrap();
        // Row count equals the primary table's row count; the FRA lookup row
        // with no athletes is dropped.
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].region.as_deref(), Some("Sweden"));
        // Unmatched NOC survives with region = None.
        assert_eq!(ds.records[1].noc, "ZZZ");
        assert_eq!(ds.records[1].region, None);
        assert_eq!(ds.records[1].height, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let dir = fixture_dir("schema");
        let athletes = "ID,Name,Sex\n1,Alice,F\n";
        let regions = "NOC,region,notes\nSWE,Sweden,\n";
        write_sources(&dir, athletes, regions);

        let err = load_dataset(&dir).unwrap_err();
        assert!(err.to_string().contains("missing"), "{err:#}");
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = fixture_dir("nofile");
        assert!(load_dataset(&dir).is_err());
    }

    #[test]
    fn na_cells_parse_to_none() {
        let dir = fixture_dir("na");
        let athletes = format!(
            "{HEADER}1,Alice,F,NA,170,60,Sweden,SWE,NA,2000,Summer,Sydney,Judo,Event,NA\n"
        );
        let regions = "NOC,region,notes\nSWE,Sweden,\n";
        write_sources(&dir, &athletes, regions);

        let ds = load_dataset(&dir).unwrap();
        let rec = &ds.records[0];
        assert_eq!(rec.age, None);
        assert_eq!(rec.games, None);
        assert_eq!(rec.medal, None);
        assert_eq!(rec.year, Some(2000));
    }
}
