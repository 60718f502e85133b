pub use anyhow::{
    anyhow,
    bail,
    ensure,
};
pub use paste::paste;
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

// Declares a thiserror enum whose variants each wrap a single message, along with a snake-case
// constructor per variant that formats its argument and hands back an anyhow::Error, e.g.
//
//     err_impl! {FooError,
//         #[error("namespace {0} doesn't exist")]
//         NamespaceNotFound(String),
//     }
//
//     return Err(FooError::namespace_not_found(ns));
#[macro_export]
macro_rules! err_impl {
    ($errtype:ident,
        $(#[$errinfo:meta] $item:ident(String),)+
    ) => {
        #[derive(Debug, Error)]
        pub(crate) enum $errtype {
            $(#[$errinfo] $item(String)),+
        }

        impl $errtype {
            $(
                paste! {
                    pub(crate) fn [<$item:snake>](in_: impl std::fmt::Display) -> anyhow::Error {
                        anyhow!{$errtype::$item(in_.to_string())}
                    }
                }
            )+
        }
    };
}

pub use err_impl;
