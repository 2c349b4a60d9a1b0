pub mod input;
pub mod rig;
pub mod spherical;
