pub mod error;
pub mod traits;

pub use error::MindtraceError;
pub use traits::{AnalysisRequest, AnalysisResponse, InsightProvider};
