pub mod common;
pub mod u501_viability_wizard;
