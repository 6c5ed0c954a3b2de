//! Journey planner deep-link builder.
//!
//! A form controller that lets a user enter any number of stations plus
//! trip options, keeps the station rows tidy as they type, and serializes
//! the form into a link the journey planner opens directly.

pub mod config;
pub mod domain;
pub mod form;
pub mod link;
pub mod rows;
pub mod web;
