//! Ready-made equip definitions.
//!
//! Each fixture isolates one equip shape the simulator treats differently: a single
//! positive stat, a nearly exhausted slot count, a levelling equip and a crafted one.

pub mod equip;

pub use equip::*;
