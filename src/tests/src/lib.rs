//! Integration tests for the token ledger.

#[cfg(test)]
mod concurrency_tests;
#[cfg(test)]
mod scenario_tests;
