pub mod alpha_mask;
pub mod anonymizer;
pub mod gaussian;
