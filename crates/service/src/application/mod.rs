//! Application layer - commands, ports, event dispatch, and services

pub mod commands;
pub mod dispatch;
pub mod integration_events;
pub mod ports;
pub mod services;
