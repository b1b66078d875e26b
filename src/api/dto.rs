use serde::{Deserialize, Serialize};

use crate::domain::flatten::FlattenOptions;
use crate::domain::row::Row;

/// Parameters of a `FLATTEN` request.
#[derive(Debug, Deserialize)]
pub struct FlattenParams {
    /// A `Program` object or a bare statement array
    pub program: serde_json::Value,
    #[serde(flatten)]
    pub options: FlattenOptions,
}

/// Payload of a successful `FLATTEN` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct RowsDto {
    pub rows: Vec<Row>,
    /// Lines of nodes that were skipped for lack of a handler
    pub unsupported: Vec<usize>,
}
