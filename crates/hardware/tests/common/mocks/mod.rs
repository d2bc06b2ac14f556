/// Mock signal adapter.
pub mod signals;
