pub mod error;
pub mod estimate;
pub mod identity;
pub mod output;
pub mod record;
pub mod scenario;
pub mod subjects;
pub mod utility;

pub use error::{ErrorCategory, RecordError};
pub use estimate::EstimateKind;
pub use record::StudentRecord;
