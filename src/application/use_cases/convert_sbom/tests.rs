use super::*;
use crate::adapters::outbound::formatters::CsvFormatter;
use crate::sbom_document::policies::HashPolicy;
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

// Mock implementations for testing
struct MockDocumentReader {
    content: Option<String>,
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, path: &Path) -> Result<Vec<u8>> {
        match &self.content {
            Some(content) => Ok(content.clone().into_bytes()),
            None => Err(SbomError::InputReadError {
                path: path.to_path_buf(),
                details: "File does not exist".to_string(),
            }
            .into()),
        }
    }
}

/// In-memory sink; writes whose bytes contain `poison` fail
#[derive(Clone, Default)]
struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
    chunks: Rc<RefCell<Vec<String>>>,
    poison: Option<&'static str>,
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.bytes.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(poison) = self.poison {
            if String::from_utf8_lossy(buf).contains(poison) {
                return Err(io::Error::other("simulated write failure"));
            }
        }
        self.bytes.borrow_mut().extend_from_slice(buf);
        self.chunks
            .borrow_mut()
            .push(String::from_utf8_lossy(buf).into_owned());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct MockTableOutput {
    buffer: SharedBuffer,
    fail_create: bool,
    created: Rc<RefCell<bool>>,
}

impl MockTableOutput {
    fn new(buffer: SharedBuffer) -> Self {
        Self {
            buffer,
            fail_create: false,
            created: Rc::new(RefCell::new(false)),
        }
    }
}

impl TableOutput for MockTableOutput {
    fn create(&self, destination: &Path) -> Result<Box<dyn Write>> {
        if self.fail_create {
            return Err(SbomError::OutputCreateError {
                path: destination.to_path_buf(),
                details: "Permission denied".to_string(),
            }
            .into());
        }
        *self.created.borrow_mut() = true;
        Ok(Box::new(self.buffer.clone()))
    }
}

#[derive(Default)]
struct MockProgressReporter {
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

const SAMPLE_BOM: &str = r#"{
    "bomFormat": "CycloneDX",
    "specVersion": "1.4",
    "version": 1,
    "components": [
        {
            "group": "org.apache.logging.log4j",
            "name": "log4j-core",
            "version": "2.17.1",
            "licenses": [{"license": {"id": "Apache-2.0"}}],
            "scope": "required",
            "description": "The Apache Log4j Implementation",
            "hashes": [{"alg": "MD5", "content": "8a6cc1a2a6b0e8ba1b3b2e1f6ef4f1b3"}]
        },
        {
            "name": "left-pad",
            "version": "1.3.0"
        },
        {
            "name": "poison-pill",
            "version": "0.0.1"
        },
        {
            "group": "com.google.guava",
            "name": "guava",
            "version": "32.1.2-jre",
            "licenses": [{"license": {"id": "Apache-2.0"}}, {"license": {"id": "MIT"}}],
            "description": "Guava, core libraries",
            "hashes": [
                {"alg": "SHA-256", "content": "abc"},
                {"alg": "MD5", "content": "xyz"}
            ]
        }
    ]
}"#;

fn request(hash_policy: HashPolicy) -> ConversionRequest {
    ConversionRequest::new(
        PathBuf::from("bom.json"),
        PathBuf::from("report.csv"),
        hash_policy,
    )
}

fn use_case(
    content: Option<&str>,
    output: MockTableOutput,
) -> ConvertSbomUseCase<MockDocumentReader, CsvFormatter, MockTableOutput, MockProgressReporter> {
    ConvertSbomUseCase::new(
        MockDocumentReader {
            content: content.map(str::to_string),
        },
        CsvFormatter::new(),
        output,
        MockProgressReporter::default(),
    )
}

#[test]
fn test_execute_writes_header_and_rows_in_order() {
    let buffer = SharedBuffer::default();
    let use_case = use_case(Some(SAMPLE_BOM), MockTableOutput::new(buffer.clone()));

    let response = use_case.execute(request(HashPolicy::First)).unwrap();

    assert_eq!(response.component_count, 4);
    assert_eq!(response.rows_written, 4);
    assert!(response.is_complete());

    let output = buffer.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "group,name,version,license,scope,description,hash-md5");
    assert_eq!(
        lines[1],
        "org.apache.logging.log4j,log4j-core,2.17.1,Apache-2.0,required,The Apache Log4j Implementation,8a6cc1a2a6b0e8ba1b3b2e1f6ef4f1b3"
    );
    assert_eq!(lines[2], ",left-pad,1.3.0,,,,");
    assert_eq!(lines[3], ",poison-pill,0.0.1,,,,");
    assert_eq!(
        lines[4],
        "com.google.guava,guava,32.1.2-jre,Apache-2.0,,\"Guava, core libraries\",abc"
    );
}

#[test]
fn test_execute_md5_policy() {
    let buffer = SharedBuffer::default();
    let use_case = use_case(Some(SAMPLE_BOM), MockTableOutput::new(buffer.clone()));

    use_case.execute(request(HashPolicy::Md5)).unwrap();

    let output = buffer.contents();
    let last = output.lines().last().unwrap();
    assert!(last.ends_with(",xyz"));
}

#[test]
fn test_execute_continues_after_row_failure() {
    let buffer = SharedBuffer {
        poison: Some("poison-pill"),
        ..SharedBuffer::default()
    };
    let use_case = use_case(Some(SAMPLE_BOM), MockTableOutput::new(buffer.clone()));

    let response = use_case.execute(request(HashPolicy::First)).unwrap();

    assert_eq!(response.rows_written, 3);
    assert_eq!(
        response.write_failures,
        vec![WriteFailure::Row {
            row: 3,
            name: "poison-pill".to_string(),
            details: "simulated write failure".to_string(),
        }]
    );

    let output = buffer.contents();
    assert_eq!(output.lines().count(), 4);
    assert!(output.contains("guava"));
    assert!(!output.contains("poison-pill"));

    let errors = use_case.progress_reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Failed to write row 3 (poison-pill)"));
}

#[test]
fn test_execute_hands_each_record_to_sink_whole() {
    let buffer = SharedBuffer::default();
    let use_case = use_case(Some(SAMPLE_BOM), MockTableOutput::new(buffer.clone()));

    use_case.execute(request(HashPolicy::First)).unwrap();

    let chunks = buffer.chunks.borrow();
    assert_eq!(chunks.len(), 5);
    for chunk in chunks.iter() {
        assert!(chunk.ends_with('\n'));
        assert_eq!(chunk.matches('\n').count(), 1);
    }
}

#[test]
fn test_execute_header_failure_still_writes_rows() {
    let buffer = SharedBuffer {
        poison: Some("hash-md5"),
        ..SharedBuffer::default()
    };
    let use_case = use_case(Some(SAMPLE_BOM), MockTableOutput::new(buffer.clone()));

    let response = use_case.execute(request(HashPolicy::First)).unwrap();

    assert_eq!(response.rows_written, 4);
    assert!(matches!(
        response.write_failures.as_slice(),
        [WriteFailure::Header { .. }]
    ));
}

#[test]
fn test_execute_read_failure() {
    let output = MockTableOutput::new(SharedBuffer::default());
    let created = output.created.clone();
    let use_case = use_case(None, output);

    let err = use_case.execute(request(HashPolicy::First)).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::InputReadError { .. })
    ));
    assert!(!*created.borrow());
}

#[test]
fn test_execute_decode_failure_creates_no_output() {
    let output = MockTableOutput::new(SharedBuffer::default());
    let created = output.created.clone();
    let use_case = use_case(Some("not json at all"), output);

    let err = use_case.execute(request(HashPolicy::First)).unwrap_err();

    match err.downcast_ref::<SbomError>() {
        Some(SbomError::DocumentDecodeError { path, details }) => {
            assert_eq!(path, &PathBuf::from("bom.json"));
            assert!(details.contains("Invalid JSON"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!*created.borrow());
}

#[test]
fn test_execute_output_create_failure() {
    let mut output = MockTableOutput::new(SharedBuffer::default());
    output.fail_create = true;
    let use_case = use_case(Some(SAMPLE_BOM), output);

    let err = use_case.execute(request(HashPolicy::First)).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::OutputCreateError { .. })
    ));
}

#[test]
fn test_execute_empty_component_list() {
    let buffer = SharedBuffer::default();
    let use_case = use_case(
        Some(r#"{"bomFormat": "CycloneDX"}"#),
        MockTableOutput::new(buffer.clone()),
    );

    let response = use_case.execute(request(HashPolicy::First)).unwrap();

    assert_eq!(response.component_count, 0);
    assert_eq!(
        buffer.contents(),
        "group,name,version,license,scope,description,hash-md5\n"
    );
}
