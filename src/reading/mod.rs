pub mod token;

pub use token::tokenize_text;
