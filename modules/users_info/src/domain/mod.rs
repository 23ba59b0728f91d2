pub mod error;
pub mod id;
pub mod repo;
pub mod service;
pub mod validator;
