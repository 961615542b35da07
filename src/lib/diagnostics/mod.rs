mod diagnostic;
pub use self::diagnostic::*;

mod reporter;
pub use self::reporter::*;
