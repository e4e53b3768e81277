pub mod headers;
pub mod result;

pub use headers::{fold_header_fields, fold_header_map};
pub use result::UploadResult;
