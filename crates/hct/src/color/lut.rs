//! Critical plane lookup table
//!
//! Generated at compile time by build.rs. Used by the HCT solver to
//! bisect along the sRGB cube boundary one 8-bit step at a time.

// Include the generated table from build.rs
include!(concat!(env!("OUT_DIR"), "/critical_planes.rs"));
