mod uri;
pub use self::uri::*;

mod source;
pub use self::source::*;

mod location;
pub use self::location::*;

mod span;
pub use self::span::*;
