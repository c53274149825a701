mod packer;
mod strategy;

#[doc(inline)]
pub use packer::pack;

#[doc(inline)]
pub use packer::pack_all;

#[doc(inline)]
pub use packer::best_plan;

#[doc(inline)]
pub use strategy::Strategy;
