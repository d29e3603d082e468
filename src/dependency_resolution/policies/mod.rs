pub mod naming_policy;
pub mod report_threshold;

pub use naming_policy::NamingPolicy;
pub use report_threshold::ReportThreshold;
