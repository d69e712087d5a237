//! Simulation of a squad of rovers exploring a rectangular plateau.
//!
//! Rovers are placed and steered by a line based script. They move one after another, and
//! every rover that has finished moving becomes an obstacle for the rovers that follow.


pub mod domain;
pub mod interpreter;
