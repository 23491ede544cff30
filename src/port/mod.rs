//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!            ┌──────────────────────────┐
//!   CLI ───▶ │  inbound: OperatorPort,  │
//!            │  Lesson, DiscountStrategy│
//!            │                          │
//!            │  outbound: Narrator      │ ───▶ console / recorder
//!            └──────────────────────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::lesson::Lesson;
pub use inbound::strategy::DiscountStrategy;
pub use outbound::narrator::{Narrator, NullNarrator};
