pub use std::collections::HashMap;
pub use std::collections::HashSet;
pub use std::fmt;
pub use std::sync::Arc;

#[macro_use]
extern crate log;

mod source;
pub use self::source::*;

mod diagnostics;
pub use self::diagnostics::*;

mod config;
pub use self::config::*;

pub mod literal;

pub mod syntax;

pub mod semantics;
