pub mod forecast;
pub mod location;
pub mod observation;
pub mod products;
pub mod summary;
pub mod timestamp;
