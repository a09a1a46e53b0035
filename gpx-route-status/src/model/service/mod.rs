pub mod http_ops;
mod service_error;
#[cfg(test)]
pub mod test_server;

pub use service_error::ServiceError;
