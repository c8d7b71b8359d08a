pub mod advection1d;
pub mod boundary;
pub mod grid;
pub mod stencil;
