// src/macros.rs

/// String shorthand. `s!()` is an empty String; `s!(x)` is
/// `String::from(x)` for any expression that converts — the report and
/// collect layers build a lot of owned strings from &str labels.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate any number of &str pieces into one String. Used by the
/// renderers where `format!` would be overkill for plain joins.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
