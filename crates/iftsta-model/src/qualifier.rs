//! Segment qualifiers recognized by the IFTSTA decoder.

use std::fmt;

/// Segment tags with meaning to the decoder.
///
/// Any tag outside this set resolves to [`Qualifier::Other`] and is ignored
/// by the field mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    /// Interchange header: syntax, sender, recipient, preparation date/time.
    Unb,
    /// Beginning of message. Marks the start of the business data.
    Bgm,
    /// Consignment information. Starts a consignment group.
    Cni,
    /// Goods identity number (global identifier).
    Gin,
    /// Date/time/period.
    Dtm,
    /// Status.
    Sts,
    /// Free text.
    Ftx,
    /// Any tag the decoder does not interpret.
    Other,
}

impl Qualifier {
    /// Resolves a segment tag, ignoring surrounding whitespace and ASCII case.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        [
            Qualifier::Unb,
            Qualifier::Bgm,
            Qualifier::Cni,
            Qualifier::Gin,
            Qualifier::Dtm,
            Qualifier::Sts,
            Qualifier::Ftx,
        ]
        .into_iter()
        .find(|q| q.as_str().eq_ignore_ascii_case(tag))
        .unwrap_or(Qualifier::Other)
    }

    /// Returns the canonical upper-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Qualifier::Unb => "UNB",
            Qualifier::Bgm => "BGM",
            Qualifier::Cni => "CNI",
            Qualifier::Gin => "GIN",
            Qualifier::Dtm => "DTM",
            Qualifier::Sts => "STS",
            Qualifier::Ftx => "FTX",
            Qualifier::Other => "",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Other => write!(f, "<other>"),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_case_insensitive() {
        assert_eq!(Qualifier::from_tag("CNI"), Qualifier::Cni);
        assert_eq!(Qualifier::from_tag("cni"), Qualifier::Cni);
        assert_eq!(Qualifier::from_tag(" Dtm "), Qualifier::Dtm);
    }

    #[test]
    fn test_from_tag_unknown() {
        assert_eq!(Qualifier::from_tag("NAD"), Qualifier::Other);
        assert_eq!(Qualifier::from_tag(""), Qualifier::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(Qualifier::Sts.to_string(), "STS");
        assert_eq!(Qualifier::Other.to_string(), "<other>");
    }
}
