//! Page fetching for league rosters and player career pages.
//!
//! Provides the [`PageFetcher`] seam the scanner fetches through and an
//! HTTP implementation that forwards an already-authenticated session.

pub mod client;
pub mod error;
pub mod fetcher;

pub use client::HttpFetcher;
pub use error::{FetchError, Result};
pub use fetcher::{FetchedPage, PageFetcher};
