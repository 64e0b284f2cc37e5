mod frame_pump;

pub use frame_pump::FramePump;
