// src/macros.rs
//
// String shorthands used all over the crate.

/// `s!()` → empty `String`, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a new `String`: `join!(stem, ".", ext)`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {
        <[&str]>::concat(&[
            ::std::convert::AsRef::<str>::as_ref(&$first)
            $(, ::std::convert::AsRef::<str>::as_ref(&$rest))+
        ])
    };
}
