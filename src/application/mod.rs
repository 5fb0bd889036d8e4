mod camera;
mod scheduler;
mod session;

pub use camera::Camera;
pub use scheduler::Scheduler;
pub use session::{Command, Session};
