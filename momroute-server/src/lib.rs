//! Accessible transit route planner server.
//!
//! A web application that answers: "of the transit routes between these
//! two places, which is easiest for someone who can't manage stairs or
//! long walks?"

pub mod cache;
pub mod directions;
pub mod domain;
pub mod outages;
pub mod scoring;
pub mod settings;
pub mod web;
