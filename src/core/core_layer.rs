// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "sales/mod.rs"]
pub mod sales;

#[path = "ai/mod.rs"]
pub mod ai;
