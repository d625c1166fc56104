pub mod metrics;
pub mod numeric;

pub use metrics::{extract_metric, extract_metrics, first_accepted, Extraction, MetricKind};
