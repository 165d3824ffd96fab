pub mod cell;
pub mod phone;
pub mod table;

pub use cell::RawCell;
pub use phone::{normalize_cell, normalize_phone, PhoneAddress, COUNTRY_CODE};
pub use table::Table;
