pub mod openai;
pub mod util;

pub use openai::OpenAi;
pub use util::strip_code_blocks;
