use crate::semantics::Checker;

mod non_portable_integer;
pub use self::non_portable_integer::*;

const NON_PORTABLE_INTEGER: NonPortableInteger = NonPortableInteger;

#[inline]
pub fn checkers() -> Vec<&'static dyn Checker> {
    vec![&NON_PORTABLE_INTEGER]
}
