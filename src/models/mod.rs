pub mod booking;
pub mod gallery;
pub mod package;
pub mod promo;
