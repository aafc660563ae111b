//! Form State Store: cumulative, synchronously-validated signup fields.

mod intent;
mod reducer;
mod state;
pub mod validate;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{BorderState, PasswordChecklist, RegistrationForm};
