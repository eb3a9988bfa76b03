//! End-to-end tests: patterns running on the engine against a bridged strip.

#[cfg(test)]
mod bus;

#[cfg(test)]
mod end_to_end;
