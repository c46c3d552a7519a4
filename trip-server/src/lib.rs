//! Truck trip planner server.
//!
//! A web application that answers: "if a driver leaves now for this pickup
//! and dropoff, what will their hours-of-service log look like?"

pub mod config;
pub mod domain;
pub mod locations;
pub mod planner;
pub mod web;
