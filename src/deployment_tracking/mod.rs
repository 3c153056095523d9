/// Domain layer - Deployment tracking business logic
///
/// Pure value objects and services with no knowledge of where tasks come
/// from or how they are rendered.
pub mod domain;
pub mod services;
