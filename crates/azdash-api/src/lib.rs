pub mod gateway;
pub mod http;

pub use gateway::{AuthStatus, ResourceGateway};
pub use http::HttpGateway;
