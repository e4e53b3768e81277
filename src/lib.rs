pub mod errors;
pub mod transfer;

pub use errors::TransferError;
pub use transfer::{fold_header_fields, fold_header_map, UploadResult};
