pub mod traits;

mod consts;
mod deploy;
mod scripts;

pub use crate::{consts::*, deploy::*, scripts::*};
