mod container_check;
mod kernel_tool;

pub use container_check::{ContainerCheck, StaticContainerCheck};
pub use kernel_tool::KernelTool;
