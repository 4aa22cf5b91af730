//! This is the documentation for tseries-rs
//!
//! A calendar-frequency conversion engine for ordinal-indexed time series:
//! pure integer translations between the annual, quarterly, monthly,
//! weekly, business-daily, daily, hourly, minutely and secondly sampling
//! frequencies, plus the array machinery that resamples whole masked
//! series across them.

#[cfg(test)]
mod tests;

pub mod frequency;

pub mod json;
