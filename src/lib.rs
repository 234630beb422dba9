//! Public library API for decompiling WMI Binary MOF containers.

/// Container validation, payload inflation, class-table decoding, and MOF text output.
pub mod bmof;
