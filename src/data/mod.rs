/// Data layer: core types, loading, filtering, aggregation, and export.
///
/// Architecture:
/// ```text
///  uploaded .xlsx bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate schema → Dataset
///   └──────────┘
///        │                          ┌─────────┐
///        ▼                      ┌──▶│ summary  │  branch → count
///   ┌──────────┐                │   └─────────┘
///   │ Dataset   │  Vec<Record>──┤
///   └──────────┘                │   ┌─────────┐
///        │                      └──▶│ export   │  Records → .xlsx bytes
///        ▼                          └─────────┘
///   ┌──────────┐
///   │  filter   │  threshold / search predicates → indices
///   └──────────┘
/// ```
///
/// `archive` sits beside the pipeline: accepted uploads are also written
/// verbatim to disk under timestamped names.

pub mod archive;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
