//! Output rendering for the topological listing
//!
//! - `run_printer`: Turns an ordered list of commits into output lines,
//!   annotating branch tips and inserting marker blocks wherever two
//!   neighboring lines are not a child/parent pair

pub mod run_printer;
