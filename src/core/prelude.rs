pub use super::base::*;
pub use super::error::*;
pub use super::lowdiscrepancy::*;
