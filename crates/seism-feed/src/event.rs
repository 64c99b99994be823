//! Immutable records produced by the decode stage.

/// A single seismic event decoded from the feed.
///
/// Fully populated or never constructed: only the decoder builds these, one
/// per well-formed feature, and they are immutable afterwards. The caller of
/// the pipeline owns them outright.
#[derive(Debug, Clone, PartialEq)]
pub struct Quake {
    /// Magnitude as reported by the feed. Real feeds carry negative and zero
    /// values, so no range is enforced here.
    pub magnitude: f64,

    /// Free-text location description, feed-supplied, no fixed grammar.
    pub place: String,

    /// Event time in epoch milliseconds, UTC.
    pub time_ms: i64,

    /// Absolute URL with further detail. Not validated at decode time.
    pub details_url: String,
}

/// Outcome of decoding one feed payload.
///
/// `quakes` preserves feed order. A malformed feature is skipped rather than
/// discarding the whole payload; each skip is recorded with its array index so
/// the shell can report it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeReport {
    pub quakes: Vec<Quake>,
    pub skipped: Vec<Skipped>,
}

/// Diagnostic for one feature the decoder could not turn into a [`Quake`].
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    /// Position in the `features` array.
    pub index: usize,
    /// Human-readable decode failure.
    pub reason: String,
}
