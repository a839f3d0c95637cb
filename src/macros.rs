// src/macros.rs

/// `String` from anything `String::from` takes. `s!()` is an empty string.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into one `String`, sized up front.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let parts: &[&str] = &[$first $(, $rest)*];
        let mut out = ::std::string::String::with_capacity(parts.iter().map(|p| p.len()).sum());
        for p in parts {
            out.push_str(p);
        }
        out
    }};
}
