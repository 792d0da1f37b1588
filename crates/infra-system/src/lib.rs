// devsweep Infrastructure - System Adapters
// Implements: DeviceTool

pub mod process_device_tool;

pub use process_device_tool::ProcessDeviceTool;
