pub mod accept;
pub mod cancel;
pub mod initialize;

pub use accept::*;
pub use cancel::*;
pub use initialize::*;
