mod base;
mod err;
mod operand;
mod linmap;
mod dense;
mod sparse;
mod rule;
mod scalar;
mod array;
mod factorized;
mod comb;

pub use base::*;
pub use err::*;
pub use operand::*;
pub use linmap::*;
pub use sparse::*;
pub use rule::*;
pub use scalar::*;
pub use array::*;
pub use factorized::*;
pub use comb::*;

pub mod fact;
pub mod config;
pub mod util;
