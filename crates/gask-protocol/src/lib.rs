pub mod generate_content;

pub use generate_content::types::*;
pub use generate_content::{
    GenerateContentPath, GenerateContentRequest, GenerateContentRequestBody,
    GenerateContentResponse,
};
