//! Closed-loop check: drive the advisor against a toy economy.
//! Run with: cargo test advisor::simulator -- --nocapture
