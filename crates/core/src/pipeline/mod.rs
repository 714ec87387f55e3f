pub mod controls;
pub mod domain;
pub mod frame_loop;
pub mod infrastructure;
