#[macro_export]
macro_rules! agg_mod {
    [ $( $name:ident $(,)? )+ ] => {
        $(
            pub mod $name;
        )+
    };
}

/// Case-insensitive `FromStr` for unit-variant enums named in upper case.
#[macro_export]
macro_rules! impl_from_str_for_enum {
    ($enum_name:ident, $( $variant:ident ),*) => {
        impl std::str::FromStr for $enum_name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $(stringify!($variant) => Ok($enum_name::$variant),)*
                    _ => Err(anyhow::anyhow!("Invalid variant: {}", s)),
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_display_for_enum {
    ($enum_name:ident, $( $variant:ident => $label:expr ),*) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( $enum_name::$variant => f.write_str($label), )*
                }
            }
        }
    };
}
