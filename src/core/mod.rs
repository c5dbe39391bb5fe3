pub mod nav;
pub mod tilt;
pub mod trail;
pub mod typing;

pub use nav::*;
pub use tilt::*;
pub use trail::*;
pub use typing::*;
