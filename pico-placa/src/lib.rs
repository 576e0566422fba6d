//! Quito "Pico y Placa" circulation checker.
//!
//! Answers: "may this vehicle be on the road at this date and time?"
//! Holidays come from a locally computed Ecuadorian calendar or, optionally,
//! a remote holiday provider.

pub mod cache;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod holidays_api;
pub mod restriction;
pub mod web;
