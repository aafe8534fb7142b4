pub mod multipart;

pub use multipart::{parse_multipart_form, FormFile, ParsedForm};
