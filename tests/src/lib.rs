//! End-to-end checks that drive whole scan logs through the interpreter and
//! inspect the emitted report events.

mod scenarios;
mod support;
