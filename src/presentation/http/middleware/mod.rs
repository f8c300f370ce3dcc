// src/presentation/http/middleware/mod.rs
pub mod rate_limit;
pub mod session_gate;

pub use rate_limit::rate_limit_layer;
pub use session_gate::session_gate;
