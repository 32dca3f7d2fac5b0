pub mod request;

pub use request::{AddAccountRequest, LoginAccountRequest};
