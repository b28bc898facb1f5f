mod command;
mod form_state;
mod result;
mod value_object;

pub use command::*;
pub use form_state::*;
pub use result::*;
pub use value_object::*;
