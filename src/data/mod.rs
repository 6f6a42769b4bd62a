/// Data layer: core types, loading, and writing.
///
/// Architecture:
/// ```text
///  Comparison_*.csv          test.txt
///        │                      │
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  loader   │          │  loader   │  parse file
///   └──────────┘          └──────────┘
///        │                      │
///        ▼                      ▼
///  CorrelationTable         SamplePair
///        │                      │
///        └──────► plot::chart ◄─┘
/// ```
///
/// `writer` produces the same two formats from computed results.

pub mod loader;
pub mod model;
pub mod writer;
