//! Generate a small synthetic data folder so the dashboard runs end-to-end:
//! `Data/athlete_events.csv`, `Data/noc_regions.csv` and a trained
//! `Data/medal_model.json` regression artifact.

use serde::Serialize;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Must serialize to the same shape the dashboard's predictor deserializes.
#[derive(Serialize)]
struct ModelArtifact {
    sex_levels: Vec<String>,
    sport_levels: Vec<String>,
    region_levels: Vec<String>,
    model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

const NOCS: &[(&str, &str)] = &[
    ("SWE", "Sweden"),
    ("FRA", "France"),
    ("JPN", "Japan"),
    ("USA", "USA"),
    ("KEN", "Kenya"),
    ("BRA", "Brazil"),
];

const SPORTS: &[&str] = &["Judo", "Fencing", "Athletics", "Swimming", "Rowing"];

const GAMES: &[(i32, &str, &str)] = &[
    (1992, "Summer", "Barcelona"),
    (1996, "Summer", "Atlanta"),
    (2000, "Summer", "Sydney"),
    (2004, "Summer", "Athina"),
    (2008, "Summer", "Beijing"),
    (2012, "Summer", "London"),
    (2016, "Summer", "Rio de Janeiro"),
];

fn main() {
    let mut rng = SimpleRng::new(42);
    std::fs::create_dir_all("Data").expect("Failed to create Data directory");

    // ---- NOC lookup (one NOC used by athletes is deliberately absent) ----
    let mut regions = csv::Writer::from_path("Data/noc_regions.csv")
        .expect("Failed to create noc_regions.csv");
    regions
        .write_record(["NOC", "region", "notes"])
        .expect("Failed to write lookup header");
    for (noc, region) in NOCS {
        regions
            .write_record([*noc, *region, ""])
            .expect("Failed to write lookup row");
    }
    regions.flush().expect("Failed to flush noc_regions.csv");

    // ---- Athlete events ----
    let mut athletes = csv::Writer::from_path("Data/athlete_events.csv")
        .expect("Failed to create athlete_events.csv");
    athletes
        .write_record([
            "ID", "Name", "Sex", "Age", "Height", "Weight", "Team", "NOC", "Games", "Year",
            "Season", "City", "Sport", "Event", "Medal",
        ])
        .expect("Failed to write athlete header");

    // Feature rows for the medalists, used below to train the model.
    let mut train_x: Vec<Vec<f64>> = Vec::new();
    let mut train_y: Vec<f64> = Vec::new();

    let n_rows = 3000;
    for id in 1..=n_rows {
        let sex = if rng.next_f64() < 0.6 { "M" } else { "F" };
        let age = 16.0 + (rng.next_f64() * 24.0).round();
        let height = 150.0 + (rng.next_f64() * 55.0).round();
        let weight = 45.0 + (rng.next_f64() * 60.0).round();
        // A few athletes with a NOC missing from the lookup table.
        let (noc, region) = if rng.next_f64() < 0.02 {
            ("ZZZ", None)
        } else {
            let (noc, region) = rng.pick(NOCS);
            (*noc, Some(*region))
        };
        let (year, season, city) = rng.pick(GAMES);
        let sport = rng.pick(SPORTS);

        // Roughly 15% of entries medal, evenly split.
        let medal = match (rng.next_f64() * 20.0) as u32 {
            0 => Some(("Gold", 1.0)),
            1 => Some(("Silver", 2.0)),
            2 => Some(("Bronze", 3.0)),
            _ => None,
        };

        athletes
            .write_record([
                id.to_string(),
                format!("Athlete {id}"),
                sex.to_string(),
                format!("{age:.0}"),
                format!("{height:.0}"),
                format!("{weight:.0}"),
                region.unwrap_or("Unknown").to_string(),
                noc.to_string(),
                format!("{year} {season}"),
                year.to_string(),
                season.to_string(),
                city.to_string(),
                sport.to_string(),
                format!("{sport} Event"),
                medal.map(|(m, _)| m).unwrap_or("NA").to_string(),
            ])
            .expect("Failed to write athlete row");

        if let (Some((_, label)), Some(region)) = (medal, region) {
            let sex_idx = if sex == "F" { 0.0 } else { 1.0 };
            let sport_idx = SPORTS.iter().position(|s| s == sport).unwrap() as f64;
            let region_idx = NOCS.iter().position(|(_, r)| r == &region).unwrap() as f64;
            train_x.push(vec![sex_idx, age, height, weight, sport_idx, region_idx]);
            train_y.push(label);
        }
    }
    athletes.flush().expect("Failed to flush athlete_events.csv");

    // ---- Train + serialize the medal regression artifact ----
    let rows: Vec<&[f64]> = train_x.iter().map(|r| r.as_slice()).collect();
    let x = DenseMatrix::from_2d_array(&rows);
    let model = LinearRegression::fit(&x, &train_y, LinearRegressionParameters::default())
        .expect("Failed to fit regression model");

    let artifact = ModelArtifact {
        sex_levels: vec!["F".to_string(), "M".to_string()],
        sport_levels: SPORTS.iter().map(|s| s.to_string()).collect(),
        region_levels: NOCS.iter().map(|(_, r)| r.to_string()).collect(),
        model,
    };
    let json = serde_json::to_string(&artifact).expect("Failed to serialize artifact");
    std::fs::write("Data/medal_model.json", json).expect("Failed to write medal_model.json");

    println!(
        "Wrote {n_rows} athlete rows, {} NOC lookup rows and a model trained on {} medalists to Data/",
        NOCS.len(),
        train_y.len()
    );
}
