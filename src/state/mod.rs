//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `user`) so services and components can
//! depend on small focused models. Each container owns its permitted
//! mutations as methods; services and components never write fields
//! directly. The root `App` component wraps one instance of each container
//! in an `RwSignal` and provides it via context.

pub mod auth;
pub mod user;
