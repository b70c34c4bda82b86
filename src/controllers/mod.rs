pub mod command;
pub mod explorer;
pub mod frame_loop;
pub mod input_controller;
pub mod ports;
