//! Diagnostics that compile away unless the `log` feature is on.
//!
//! With the feature off the arguments are still type-checked but never
//! evaluated, so call sites must not rely on them for side effects.

// #[macro_export] places the macros at the crate root; #[doc(hidden)] plus
// the renaming re-export below keeps them namespaced under `logging`.
pub(crate) use crate::{__debug as debug, __warn as warn};

#[doc(hidden)]
#[macro_export]
macro_rules! __debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            ::log::debug!(target: "zenbgr", $($arg)+);
        }
        #[cfg(not(feature = "log"))]
        {
            if false {
                ::core::format_args!($($arg)+);
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            ::log::warn!(target: "zenbgr", $($arg)+);
        }
        #[cfg(not(feature = "log"))]
        {
            if false {
                ::core::format_args!($($arg)+);
            }
        }
    };
}
