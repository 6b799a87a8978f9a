//! Ordered request gates applied as a single middleware layer.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::request::Parts;
use axum::middleware::{self, Next};
use axum::response::Response;

/// Outcome of a gate inspecting a request.
#[derive(Debug)]
pub enum GateDecision {
    /// Hand the request to the next gate, or to the handler after the last.
    Forward,
    /// Stop and send this response.
    Respond(Response),
}

/// A single check in front of a handler.
pub trait Gate: Send + Sync + 'static {
    /// Short name used in logs and pipeline listings.
    fn name(&self) -> &'static str;

    /// Inspects the request head.
    fn inspect(&self, parts: &Parts) -> GateDecision;
}

/// A fixed sequence of gates.
///
/// The first gate is the outermost: it sees the request before any other,
/// and the first gate to respond ends evaluation.
#[derive(Clone)]
pub struct GatePipeline {
    gates: Arc<[Arc<dyn Gate>]>,
}

impl std::fmt::Debug for GatePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatePipeline")
            .field("gates", &self.names())
            .finish()
    }
}

impl GatePipeline {
    /// Builds a pipeline from gates in evaluation order.
    pub fn new(gates: Vec<Arc<dyn Gate>>) -> Self {
        Self {
            gates: gates.into(),
        }
    }

    /// Gate names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.gates.iter().map(|gate| gate.name()).collect()
    }

    /// Runs the gates in order against a request head.
    pub fn evaluate(&self, parts: &Parts) -> GateDecision {
        for gate in self.gates.iter() {
            if let GateDecision::Respond(response) = gate.inspect(parts) {
                tracing::debug!(
                    gate = gate.name(),
                    status = %response.status(),
                    path = %parts.uri.path(),
                    "Request stopped by gate"
                );
                return GateDecision::Respond(response);
            }
        }
        GateDecision::Forward
    }

    /// Wraps every route and the fallback of `router`.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(middleware::from_fn_with_state(self.clone(), run_gates))
    }

    /// Wraps only the matched routes of `router`.
    pub fn apply_to_routes<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.route_layer(middleware::from_fn_with_state(self.clone(), run_gates))
    }
}

async fn run_gates(State(pipeline): State<GatePipeline>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    match pipeline.evaluate(&parts) {
        GateDecision::Forward => next.run(Request::from_parts(parts, body)).await,
        GateDecision::Respond(response) => response,
    }
}
