pub mod campaigns;
pub mod charts;
pub mod metrics;

pub use campaigns::CampaignTable;
pub use charts::ChartsSection;
pub use metrics::MetricsSection;
