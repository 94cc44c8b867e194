pub mod prompt;
pub mod writer;
