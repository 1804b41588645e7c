//! Region partitioning and consignment grouping.

use iftsta_model::{Qualifier, Segment};

/// Marks the start of the business data; everything before it is header.
pub const MESSAGE_START: Qualifier = Qualifier::Bgm;

/// Starts a new consignment group.
pub const GROUP_START: Qualifier = Qualifier::Cni;

/// Splits segments into the header region and the data region.
///
/// The data region starts at (and includes) the first `marker` segment.
/// Without a marker the whole sequence is header and the data region is empty.
pub fn split_regions(segments: &[Segment], marker: Qualifier) -> (&[Segment], &[Segment]) {
    let start = segments
        .iter()
        .position(|segment| segment.is(marker))
        .unwrap_or(segments.len());
    segments.split_at(start)
}

/// Partitions the data region into contiguous groups, one per `group_start` segment.
///
/// Segments before the first `group_start` segment belong to no group.
pub fn group_consignments(data: &[Segment], group_start: Qualifier) -> Vec<&[Segment]> {
    let starts: Vec<usize> = data
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.is(group_start))
        .map(|(index, _)| index)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, &begin)| {
            let end = starts.get(n + 1).copied().unwrap_or(data.len());
            &data[begin..end]
        })
        .collect()
}
