pub mod guard;
pub mod session;

pub use guard::{authorize, GuardOutcome};
pub use session::{decode_claims, fetch_current_user, Claims};
