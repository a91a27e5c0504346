//! Swan Core Types
//!
//! This crate provides the host value model the archetype engine operates on:
//! - Scalar values (undefined, null, booleans, numbers, strings)
//! - Shared compound values (Object, Array) with reference semantics
//! - Callable values (Function) with an explicit receiver
//! - Property slots, including live accessors linked to another object

mod function;
mod object;
mod value;

pub use function::*;
pub use object::*;
pub use value::*;
