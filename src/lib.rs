pub mod display;
pub mod error;
pub mod key;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod stats;
pub mod tree;

pub use display::{DisplayMapping, DEFAULT_LABEL};
pub use error::ReportError;
pub use key::{DecodeError, MeasurementKey, MetricKind};
pub use pipeline::ReportPaths;
pub use stats::MetricSummary;
pub use tree::{SampleTree, SizeBucket, SummaryTree};
