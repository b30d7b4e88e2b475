//! MEI - Brazilian micro-entrepreneur tax simulator
//!
//! This library estimates the fixed monthly DAS under the MEI regime for a
//! monthly revenue and activity, checks the annual MEI ceiling, and compares
//! it with rough self-employed and Simples Nacional estimates.

pub mod cli;
pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod input;
pub mod session;
pub mod tax;
pub mod ui;
pub mod utils;
