//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`] - invalid input to the weighting core
//! - [`error::RosterFormatError`] - unreadable roster or ledger text

pub mod error;
