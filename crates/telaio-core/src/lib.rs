pub mod config;
pub mod frame;
pub mod live;
pub mod log;
pub mod owner;

pub use config::Config;
pub use frame::{Bounds, Frame, Point, Size};
pub use live::LiveFrame;
pub use owner::{FrameOwner, FrameResult};
