pub mod guard;
pub mod marker;

pub use guard::{check, Access, SIGNIN_PATH};
pub use marker::{MarkerError, Role, SessionMarker};
