//! EDIFACT segment structure.
//!
//! A message is a sequence of segments; each segment has a qualifier tag and
//! a list of data elements; each data element has one or more components.
//! Out-of-range lookups return `None` instead of panicking, since senders
//! routinely omit trailing elements.

use crate::qualifier::Qualifier;

/// One `+`-delimited field of a segment, split into its `:`-delimited components.
///
/// Omitted components are kept as empty strings so positions stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataElement {
    components: Vec<String>,
}

impl DataElement {
    /// Creates a data element from its ordered component values.
    pub fn new(components: Vec<String>) -> Self {
        Self { components }
    }

    /// Returns the component at `index`, or `None` past the end.
    pub fn component(&self, index: usize) -> Option<&str> {
        self.components.get(index).map(String::as_str)
    }

    /// Returns all components in order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the element has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DataElement {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A single apostrophe-terminated unit of an EDIFACT message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    tag: String,
    elements: Vec<DataElement>,
}

impl Segment {
    /// Creates a segment from its (already trimmed) tag and data elements.
    pub fn new(tag: impl Into<String>, elements: Vec<DataElement>) -> Self {
        Self {
            tag: tag.into(),
            elements,
        }
    }

    /// Returns the raw qualifier tag as it appeared in the message.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the recognized qualifier for this segment's tag.
    pub fn qualifier(&self) -> Qualifier {
        Qualifier::from_tag(&self.tag)
    }

    /// Returns true if the tag equals `qualifier`'s tag, ignoring ASCII case.
    pub fn is(&self, qualifier: Qualifier) -> bool {
        self.qualifier() == qualifier
    }

    /// Returns all data elements in order.
    pub fn elements(&self) -> &[DataElement] {
        &self.elements
    }

    /// Returns the data element at `index`, or `None` past the end.
    pub fn element(&self, index: usize) -> Option<&DataElement> {
        self.elements.get(index)
    }

    /// Returns component `component` of data element `element`.
    ///
    /// `None` if either index is out of range.
    pub fn value(&self, element: usize, component: usize) -> Option<&str> {
        self.element(element)?.component(component)
    }

    /// Like [`Segment::value`], but also treats an empty component as absent.
    pub fn non_empty_value(&self, element: usize, component: usize) -> Option<&str> {
        self.value(element, component).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dtm() -> Segment {
        Segment::new(
            "DTM",
            vec![["334", "202401151230", "203"].into_iter().collect()],
        )
    }

    #[test]
    fn test_value_lookup() {
        let segment = dtm();
        assert_eq!(segment.value(0, 0), Some("334"));
        assert_eq!(segment.value(0, 2), Some("203"));
    }

    #[test]
    fn test_value_out_of_range_is_none() {
        let segment = dtm();
        assert_eq!(segment.value(0, 3), None);
        assert_eq!(segment.value(1, 0), None);
        assert!(segment.element(5).is_none());
    }

    #[test]
    fn test_non_empty_value() {
        let segment = Segment::new("GIN", vec![DataElement::default(), [""].into_iter().collect()]);
        assert_eq!(segment.value(1, 0), Some(""));
        assert_eq!(segment.non_empty_value(1, 0), None);
    }

    #[test]
    fn test_is_ignores_case() {
        let segment = Segment::new("cni", Vec::new());
        assert!(segment.is(Qualifier::Cni));
        assert_eq!(segment.tag(), "cni");
    }
}
