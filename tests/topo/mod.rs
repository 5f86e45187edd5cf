mod corrupt_object;
mod deterministic_output;
mod merge_history;
mod outside_repository;
