//! Fetching icons from the network into the local mirror.
//!
//! - [`reference`] - strict `prefix:name` validation (returns `Option`)
//! - [`collections`] - prefix → collection and collection → license tables
//! - [`http`] - GET with a hard deadline
//! - [`provenance`] - the ledger of where each fetched icon came from
//! - [`fetcher`] - [`IconFetcher`], tying the above to a store

pub mod collections;
pub mod fetcher;
pub mod http;
pub mod provenance;
pub mod reference;

pub use collections::{iconify_set, license_for, UNKNOWN_LICENSE};
pub use fetcher::IconFetcher;
pub use http::{FetchResponse, HttpFetcher};
pub use provenance::{ProvenanceLedger, ProvenanceRecord, LEDGER_HEADER};
pub use reference::{is_valid_name, parse_reference, FetchReference, MAX_NAME_LEN};
