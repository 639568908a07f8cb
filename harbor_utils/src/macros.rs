/// Asserts that an expression matches a pattern, optionally with a guard.
///
/// In the guarded form the bindings are references into the value.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: {val:?} does not match {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used in the guard")]
            $pat => ::core::panic!(
                "Assertion failed: {val:?} does not satisfy {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: {val:?} does not match {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}
