//! Shared wire models used across baskets, orders, customers, and other entities

pub mod address;
pub mod customer_info;
pub mod fault;
pub mod image;

pub use address::Address;
pub use customer_info::CustomerInfo;
pub use fault::ApiFault;
pub use image::Image;
