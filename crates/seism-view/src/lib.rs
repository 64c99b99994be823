//! Presentation derivation for earthquake rows.
//!
//! Pure, total functions only: location splitting, magnitude bucketing and
//! formatting, and local-zone date/time rendering. The display shell owns the
//! color palette and layout; this crate only hands back strings and the
//! bucket key.

mod location;
mod magnitude;
mod when;

pub use location::{NEAR_THE, split_place};
pub use magnitude::{format_magnitude, magnitude_bucket};
pub use when::{format_date, format_date_in, format_time, format_time_in};
