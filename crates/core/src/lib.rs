pub mod detection;
pub mod filters;
pub mod masking;
pub mod pipeline;
pub mod shared;
