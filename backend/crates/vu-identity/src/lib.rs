//! Identity correlation: resolving a full canonical identity from any one
//! known key, and verifying a claimed UUID <-> Discord ID link against
//! what Hypixel and Discord independently report before it is stored.

pub mod cape;
pub mod error;
pub mod identity_resolver;
pub mod link_key;
pub mod verification_engine;

pub use cape::cape_variant;
pub use error::{IdentityError, Result as IdentityErrorResult};
pub use identity_resolver::IdentityResolver;
pub use link_key::LinkKey;
pub use verification_engine::{VerificationEngine, VerificationOutcome};
