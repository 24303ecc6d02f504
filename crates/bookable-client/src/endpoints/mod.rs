//! Typed Endpoints
//!
//! One function per backend resource the storefront reads, organized by domain.

mod businesses;
mod categories;
mod customers;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Re-export all public items
pub use businesses::*;
pub use categories::*;
pub use customers::*;

/// Characters escaped when a route parameter is spliced into a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::segment;

    #[test]
    fn test_segment_escapes_path_separators() {
        assert_eq!(segment("12"), "12");
        assert_eq!(segment("1/../admin"), "1%2F..%2Fadmin");
        assert_eq!(segment("a b?c"), "a%20b%3Fc");
    }
}
