//! Name filtering for topic-addressed dispatch (§4.9), ported from
//! `NameFilter` in the reference implementation's `Application/Endpoint.h`.
//! A filter is a fixed byte sequence; two predicates decide whether an
//! incoming topic is in scope.

/// A fixed byte sequence an incoming topic is matched or prefix-matched
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter(Vec<u8>);

impl NameFilter {
    /// Creates a filter from any byte-sliceable value (a single byte array,
    /// a string literal, or an owned buffer), mirroring the reference
    /// implementation's constructor overloads for `uint8_t`, `const char*`,
    /// and a generic byte array.
    pub fn new(filter: impl Into<Vec<u8>>) -> Self {
        Self(filter.into())
    }

    /// The filter's canonical bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether `name` is exactly equal to this filter.
    #[must_use]
    pub fn matches(&self, name: &[u8]) -> bool {
        name == self.0.as_slice()
    }

    /// Whether `name` begins with this filter's bytes.
    #[must_use]
    pub fn prefixes(&self, name: &[u8]) -> bool {
        name.len() >= self.0.len() && name[..self.0.len()] == self.0[..]
    }

    /// The remainder of `name` after this filter's prefix, if
    /// [`Self::prefixes`] holds. Per the reference implementation's
    /// warning, this does not itself check that the filter matches; call
    /// [`Self::prefixes`] first.
    #[must_use]
    pub fn suffix<'a>(&self, name: &'a [u8]) -> &'a [u8] {
        if self.0.len() >= name.len() { &[] } else { &name[self.0.len()..] }
    }
}

impl From<&str> for NameFilter {
    fn from(filter: &str) -> Self {
        Self::new(filter.as_bytes().to_vec())
    }
}

impl From<u8> for NameFilter {
    fn from(filter: u8) -> Self {
        Self::new(vec![filter])
    }
}

#[cfg(test)]
mod tests {
    use super::NameFilter;

    #[test]
    fn matches_requires_an_exact_match() {
        let filter = NameFilter::from("echo");
        assert!(filter.matches(b"echo"));
        assert!(!filter.matches(b"echos"));
        assert!(!filter.matches(b"ech"));
    }

    #[test]
    fn prefixes_accepts_a_longer_name_sharing_the_prefix() {
        let filter = NameFilter::from("echo");
        assert!(filter.prefixes(b"echo/extra"));
        assert!(!filter.prefixes(b"ech"));
    }

    #[test]
    fn suffix_returns_the_remainder_after_the_prefix() {
        let filter = NameFilter::from("echo/");
        assert_eq!(filter.suffix(b"echo/extra"), b"extra");
    }

    #[test]
    fn single_byte_filter_round_trips() {
        let filter = NameFilter::from(0x01u8);
        assert!(filter.matches(&[0x01]));
    }
}
