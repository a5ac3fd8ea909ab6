//! Profile normalization subsystem.
//!
//! # Data Flow
//! ```text
//! Raw upstream candidates
//!     → normalize.rs (apply defaults, derive age fields, stringify numbers)
//!     → types.rs (NormalizedProfile, the outward JSON shape)
//!     → resolve_candidates (0 → None, 1 → Single, many → Multiple)
//! ```
//!
//! # Design Decisions
//! - Presentation constants live in types.rs next to the shapes they fill
//! - Cardinality decides confidence: a lone match is High, an ambiguous
//!   set is Medium with a disambiguation note
//! - All timestamps flow in as parameters; nothing here reads the clock

pub mod normalize;
pub mod types;

pub use normalize::resolve_candidates;
pub use types::Confidence;
pub use types::LookupResult;
pub use types::MultipleMatches;
pub use types::NormalizedProfile;
