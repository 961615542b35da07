mod occurrence;
pub use self::occurrence::*;

mod analysis;
pub use self::analysis::*;

mod checker;
pub use self::checker::*;

pub mod checkers;
