//! Request lifecycle: the single state record and its fixed messages.
//!
//! ```text
//!            begin()                 settle(Answer | Error)
//!   Idle ─────────────> Loading ───────────────────────────> Settled
//!                          ^                                    │
//!                          └────────────── begin() ─────────────┘
//! ```

pub mod entities;
pub mod messages;
