mod pretty_reporter;
pub use self::pretty_reporter::*;
