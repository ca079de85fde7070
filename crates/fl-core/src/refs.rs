//! Column reference model

use fl_python::SourceRegion;

/// A syntactic reference to one or more columns on a named frame.
///
/// `columns` is a list because `df[['a', 'b']]` packs multiple columns
/// at a single site; it is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    /// Region of the whole subscript expression
    pub region: SourceRegion,
    /// Region of the frame name inside the subscript
    pub frame_region: SourceRegion,
    /// Name of the frame variable
    pub frame: String,
    /// Columns accessed at this site
    pub columns: Vec<String>,
}
