//! Rosteraudit Scanner - League roster compliance checking.
//!
//! This crate reconstructs team rosters from a league's "all teams" page,
//! extracts career totals from player pages, and flags roster slots that
//! break league rules:
//!
//! - players in an Injured slot without an active IL designation
//! - players in a Minors slot whose career at-bats or innings meet the
//!   configured threshold
//!
//! # Features
//!
//! - Tolerant row-by-row roster parsing with explicit scan state
//! - Career-stat extraction from arbitrarily shaped stats tables
//! - Bounded concurrent player checks (at most 10 in flight)
//! - Per-player failures recorded in the report instead of aborting the run
//!
//! # Example
//!
//! ```rust,ignore
//! use rosteraudit_scanner::CheckOrchestrator;
//! use std::sync::Arc;
//!
//! let orchestrator = CheckOrchestrator::new(Arc::new(fetcher));
//! let report = orchestrator
//!     .run_check("https://myleague.baseball.cbssports.com", &config)
//!     .await;
//! println!("{} violations", report.violation_count());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[allow(missing_docs)]
pub mod career;
#[allow(missing_docs)]
pub mod error;
pub mod orchestrator;
pub mod progress;
pub mod report;
#[allow(missing_docs)]
pub mod roster;
pub mod rules;
#[allow(missing_docs)]
pub mod url_builder;

// Re-export commonly used types
pub use career::{extract_career_stat, CareerStat};
pub use error::{Result, ScanError};
pub use orchestrator::{CheckOrchestrator, MAX_IN_FLIGHT_CHECKS, MISSING_PLAYER_ID_REASON};
pub use progress::{NoProgress, ProgressSink, TracingProgress};
pub use report::{violations_by_team, CheckError, CheckReport, StatMeasurement, Violation};
pub use roster::{parse_roster, InjuredPlayer, MinorsPlayer, RosterRow, RosterScan, Team};
pub use rules::{check_injured_slots, injured_slot_violation, minors_eligibility_violation};
pub use url_builder::{career_stats_url, roster_url};
