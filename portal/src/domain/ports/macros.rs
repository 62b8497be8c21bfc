//! Defines the helper macro for generating domain port error enums.
//!
//! Every variant carries named fields; the macro derives `thiserror::Error`
//! with the given message and emits a snake-case constructor per variant
//! whose parameters accept anything convertible into the field type. The
//! variant's doc comment is reused on its constructor.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    $(
                        #[doc = concat!("`", stringify!($field), "` reported by the adapter.")]
                        $field: $ty,
                    )+
                },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    $(#[$variant_meta])*
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;
