/// Compile a pattern once and hand back the shared instance on every later
/// call. Patterns are literals, so a failure to compile is a programming
/// error.
macro_rules! pattern {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static PATTERN: OnceLock<::regex::Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e))
        })
    }};
}
