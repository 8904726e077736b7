pub mod access_code;
pub mod validated_json;

pub use access_code::AccessCode;
pub use validated_json::{Validate, ValidatedJson};
