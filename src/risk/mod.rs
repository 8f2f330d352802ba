//! Risk scoring for categorized analyses.
//!
//! - [`scorer`] — counts distinct matching categories and maps the count to a
//!   [`RiskLevel`](crate::models::RiskLevel).

pub mod scorer;
