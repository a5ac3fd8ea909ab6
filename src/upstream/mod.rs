//! Stack Exchange API integration subsystem.
//!
//! # Data Flow
//! ```text
//! Lookup request
//!     → client.rs (build URL, attach site/filter query, send with deadline)
//!     → types.rs (deserialize the items envelope into RawProfile records)
//!     → On non-2xx: types.rs (parse the error envelope, keep the raw body)
//!     → Candidates handed to the profile subsystem
//! ```
//!
//! # Design Decisions
//! - One shared reqwest client; connection reuse matters at this call rate
//! - Errors carry the upstream status and raw body so callers decide policy
//! - No retries; a failed call is reported immediately

pub mod client;
pub mod types;

pub use client::StackExchangeClient;
pub use types::BadgeCounts;
pub use types::RawProfile;
pub use types::UpstreamError;
pub use types::UpstreamResult;
