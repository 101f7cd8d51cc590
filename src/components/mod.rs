pub mod cta;
pub mod footer;
pub mod hero;
pub mod impact;
pub mod navigation;
pub mod problem;
pub mod solution;
pub mod technology;
