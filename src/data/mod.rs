/// Data layer: core types, loading/joining, and aggregation.
///
/// Architecture:
/// ```text
///  athlete_events.csv   noc_regions.csv
///        │                    │
///        └───────┬────────────┘
///                ▼
///          ┌──────────┐
///          │  loader   │  parse + left join on NOC → OlympicDataset
///          └──────────┘
///                │
///                ▼
///          ┌───────────────┐
///          │ OlympicDataset │  Vec<Participation>, categorical indices
///          └───────────────┘
///                │
///                ▼
///          ┌───────────┐
///          │ aggregate  │  group-by/count views → chart-ready series
///          └───────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
