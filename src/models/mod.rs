//! Data models

pub mod scenario;
pub mod assessment;
pub mod tier;
pub mod notice;

pub use scenario::*;
pub use assessment::*;
pub use tier::*;
pub use notice::*;
