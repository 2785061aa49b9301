//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.
//! They depend on repository ports and provide the building blocks for use cases.

pub mod check_record;

pub use check_record::{CheckRecords, CONFIGURATION_FLAG, FLAG_NAMESPACE};
