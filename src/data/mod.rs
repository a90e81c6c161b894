pub mod synthetic;

pub use synthetic::generate_linear_split;
