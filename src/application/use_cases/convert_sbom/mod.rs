use crate::application::dto::{ConversionRequest, ConversionResponse};
use crate::ports::outbound::{DocumentReader, ProgressReporter, TableFormatter, TableOutput};
use crate::sbom_document::domain::Bom;
use crate::sbom_document::services::{DocumentDecoder, RowProjector, TABLE_HEADER};
use crate::shared::error::{SbomError, WriteFailure};
use crate::shared::Result;
use std::io::Write;

/// ConvertSbomUseCase - flattens an SBOM document into a CSV report
///
/// Runs strictly in sequence: read, decode, create output, write rows.
/// Read, decode and output-create failures abort the run. Record write
/// failures do not; they are collected into the response.
///
/// # Type Parameters
/// * `DR` - DocumentReader implementation
/// * `TF` - TableFormatter implementation
/// * `TO` - TableOutput implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertSbomUseCase<DR, TF, TO, PR> {
    document_reader: DR,
    table_formatter: TF,
    table_output: TO,
    progress_reporter: PR,
}

impl<DR, TF, TO, PR> ConvertSbomUseCase<DR, TF, TO, PR>
where
    DR: DocumentReader,
    TF: TableFormatter,
    TO: TableOutput,
    PR: ProgressReporter,
{
    /// Creates a new ConvertSbomUseCase with injected dependencies
    pub fn new(
        document_reader: DR,
        table_formatter: TF,
        table_output: TO,
        progress_reporter: PR,
    ) -> Self {
        Self {
            document_reader,
            table_formatter,
            table_output,
            progress_reporter,
        }
    }

    /// Executes the conversion
    ///
    /// # Errors
    /// - `SbomError::InputReadError` if the document cannot be read
    /// - `SbomError::DocumentDecodeError` if it is not a JSON object of the
    ///   expected shape
    /// - `SbomError::OutputCreateError` if the report cannot be created;
    ///   nothing is written in that case
    pub fn execute(&self, request: ConversionRequest) -> Result<ConversionResponse> {
        // Step 1: Load the document
        let bom = self.load_document(&request)?;

        // Step 2: Open the destination
        let mut sink = self.table_output.create(&request.output_path)?;

        // Step 3: Write header and one row per component
        self.progress_reporter.report(&format!(
            "📝 Writing CSV report (hash column policy: {})...",
            request.hash_policy
        ));
        let projector = RowProjector::new(request.hash_policy);
        let (rows_written, write_failures) = self.write_table(sink.as_mut(), &bom, &projector);

        for failure in &write_failures {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", failure));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Wrote {} of {} row(s) to: {}",
            rows_written,
            bom.components.len(),
            request.output_path.display()
        ));

        Ok(ConversionResponse::new(
            bom.components.len(),
            rows_written,
            write_failures,
        ))
    }

    fn load_document(&self, request: &ConversionRequest) -> Result<Bom> {
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM document from: {}",
            request.input_path.display()
        ));

        let bytes = self.document_reader.read_document(&request.input_path)?;
        let bom = DocumentDecoder::decode(&bytes).map_err(|e| SbomError::DocumentDecodeError {
            path: request.input_path.clone(),
            details: e.to_string(),
        })?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s) ({})",
            bom.components.len(),
            bom.format_label()
        ));

        Ok(bom)
    }

    /// Writes every record, continuing past failures.
    ///
    /// Returns the number of component rows written and the failures seen.
    fn write_table(
        &self,
        sink: &mut dyn Write,
        bom: &Bom,
        projector: &RowProjector,
    ) -> (usize, Vec<WriteFailure>) {
        let mut failures = Vec::new();

        if let Err(e) = self.write_record(sink, &TABLE_HEADER) {
            failures.push(WriteFailure::Header {
                details: e.to_string(),
            });
        }

        let total = bom.components.len();
        let mut rows_written = 0;
        for (index, component) in bom.components.iter().enumerate() {
            let row = projector.project(component);
            match self.write_record(sink, &row.fields()) {
                Ok(()) => rows_written += 1,
                Err(e) => failures.push(WriteFailure::Row {
                    row: index + 1,
                    name: component.name.clone(),
                    details: e.to_string(),
                }),
            }
            self.progress_reporter
                .report_progress(index + 1, total, Some(component.name.as_str()));
        }

        if let Err(e) = sink.flush() {
            failures.push(WriteFailure::Flush {
                details: e.to_string(),
            });
        }

        (rows_written, failures)
    }

    /// Encodes the whole record first, then hands it to the sink in one
    /// `write_all`. A sink that fails midway may keep a partial line.
    fn write_record(&self, sink: &mut dyn Write, fields: &[&str]) -> Result<()> {
        let record = self.table_formatter.encode_record(fields)?;
        sink.write_all(&record)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
