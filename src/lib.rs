// #![deny(unused_crate_dependencies)]

mod generic;
mod session;

pub use generic::*;
pub use session::*;
