//! Integration tests for the hacking game.
//!
//! Tests for full playthroughs through the interpreter:
//! - Starting and restarting
//! - Level progression
//! - Wrong answers and lockout
//! - Victory

mod playthrough_tests;
