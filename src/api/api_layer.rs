// The api module is the inbound HTTP adapter. It translates requests into
// pipeline calls and pipeline errors into the uniform JSON envelope; no
// business logic lives here.

#[path = "cors.rs"]
pub mod cors;

#[path = "routes.rs"]
pub mod routes;
