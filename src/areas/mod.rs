//! Core repository components
//!
//! This module contains the read-only building blocks of a Git repository:
//!
//! - `database`: Loose object database the commits are read from
//! - `refs`: Local branch enumeration (refs/heads)
//! - `repository`: Repository discovery and coordination

pub mod database;
pub mod refs;
pub mod repository;
