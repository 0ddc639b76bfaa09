/// Data layer: core types, loading, filtering, and view computation.
///
/// Architecture:
/// ```text
///  scenarios .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, apply label maps → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, distinct-value indices (immutable)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  technology set + cost ranges → matching indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  counts, distinct-cost summaries, axis descriptors
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
