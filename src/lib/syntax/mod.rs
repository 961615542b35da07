mod tokens;
pub use self::tokens::*;

mod lexer;
pub use self::lexer::*;

mod integer;
pub use self::integer::*;

mod integer_type;
pub use self::integer_type::*;

mod unit;
pub use self::unit::*;
