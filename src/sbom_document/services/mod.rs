pub mod document_decoder;
pub mod row_projector;

pub use document_decoder::DocumentDecoder;
pub use row_projector::{RowProjector, TableRow, TABLE_HEADER};
