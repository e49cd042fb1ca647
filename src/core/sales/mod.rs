pub mod consolidation;
pub mod pipeline;

pub use consolidation::SalesTable;
pub use pipeline::{
    AccessTokenSource, DocumentRef, PipelineError, SalesQaService, SheetValuesReader,
    SpreadsheetCatalog,
};
