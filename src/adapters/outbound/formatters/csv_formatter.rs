use crate::ports::outbound::TableFormatter;
use crate::shared::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// CsvFormatter adapter encoding records as RFC 4180 style CSV
///
/// Fields containing the delimiter, a quote or a line break are quoted and
/// embedded quotes are doubled. Records end with `\n`.
pub struct CsvFormatter {
    builder: WriterBuilder,
}

impl CsvFormatter {
    pub fn new() -> Self {
        let mut builder = WriterBuilder::new();
        builder
            .delimiter(b',')
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'));
        Self { builder }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for CsvFormatter {
    fn encode_record(&self, fields: &[&str]) -> Result<Vec<u8>> {
        let mut writer = self.builder.from_writer(Vec::new());
        writer.write_record(fields)?;
        writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finish CSV record: {}", e.error()))
    }
}
