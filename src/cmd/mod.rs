/// Model to script conversion command.
pub mod convert;
/// Decoded instance tree inspection command.
pub mod inspect;

mod util;
