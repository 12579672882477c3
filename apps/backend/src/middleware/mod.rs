//! Request middleware.
//!
//! Wire order in `App` (last `wrap` runs first):
//!
//! App::new()
//!     .wrap(cors_middleware())
//!     .wrap(StructuredLogger) // one request_completed event
//!     .wrap(TraceSpan)        // span + task-local trace context
//!     .wrap(RequestTrace)     // assigns the trace id

pub mod cors;
pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use cors::cors_middleware;
pub use request_trace::{RequestTrace, TraceId};
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
