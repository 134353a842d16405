mod category;

pub mod databases;
pub mod languages;
pub mod setup;
pub mod status;
