pub mod cartoon;
pub mod colorize;
pub mod engine;
pub mod error;
pub mod gray;
pub mod kind;
pub mod noise;
pub mod ops;
pub mod posterize;
