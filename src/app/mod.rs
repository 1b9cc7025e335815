//! Application core: pure domain logic, zero I/O.
//!
//! The poll-cadence driver loop and the command/event vocabulary of the
//! prop.  All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer testable without peripherals.
//! Sensor readings are reported, never fed back into the actuators.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
