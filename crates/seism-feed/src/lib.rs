//! USGS earthquake feed client: URL building, bounded-timeout fetching and
//! defensive GeoJSON decoding.
//!
//! # Architecture
//!
//! - [`Quake`] / [`DecodeReport`] - Immutable records produced by the pipeline
//! - [`build_url`] / [`decode`] - Pure transformations
//! - [`Fetcher`] / [`HttpClient`] - I/O with trait abstraction
//!
//! The [`query`] composition root chains the three stages and surfaces a typed
//! failure per stage, so callers can tell "no events matched" apart from "the
//! feed was unreachable or malformed".

mod decode;
mod endpoint;
mod error;
mod event;
mod fetch;
mod http;
mod pipeline;

pub use decode::decode;
pub use endpoint::build_url;
pub use error::{DecodeError, FeedError, FetchError};
pub use event::{DecodeReport, Quake, Skipped};
pub use fetch::{Fetcher, Timeouts};
pub use http::{BoxStream, HttpClient};
pub use pipeline::query;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
