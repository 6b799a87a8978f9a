//! Gates and the pipeline that orders them.

pub mod authorize;
pub mod basic_auth;
pub mod countdown;
pub mod gate;

pub use authorize::AuthorizationGate;
pub use basic_auth::BasicAuthGate;
pub use countdown::{COUNTDOWN_PATH, CountdownGate};
pub use gate::{Gate, GateDecision, GatePipeline};
