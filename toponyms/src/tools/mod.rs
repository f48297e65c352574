pub mod join;
pub mod layers;
