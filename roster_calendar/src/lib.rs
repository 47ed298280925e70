pub mod error;
pub mod month_model;
pub mod roster_model;
pub mod shift_model;
