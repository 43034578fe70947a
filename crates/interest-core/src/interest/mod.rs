pub mod comparison;
pub mod compound;
pub mod compounding;
pub mod simple;
