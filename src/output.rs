//! Result types returned by the conversion entry points.

/// The converted document plus run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    /// The HTML fragment produced by the rule chain.
    pub html: String,
    pub stats: ConversionStats,
}

/// Size and timing figures for one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// UTF-8 byte length of the Markdown that entered the rule chain.
    pub input_bytes: usize,
    /// UTF-8 byte length of the HTML written out.
    pub output_bytes: usize,
    /// Wall-clock time for the whole conversion, I/O included.
    pub total_duration_ms: u64,
}
