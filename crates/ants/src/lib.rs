//! # Ants
//!
//! The card-battle table: rules, screen and players wired together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                             ANTS TABLE                              │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  ┌─────────────────┐     ┌─────────────────┐     ┌───────────────┐  │
//! │  │   ants_rules    │     │    ants_ui      │     │ ants_rendering│  │
//! │  │                 │     │                 │     │               │  │
//! │  │  • Resources    │     │  • Slides       │     │  • Vdp        │  │
//! │  │  • Effects      │     │  • Pads/cursor  │     │  • Card cache │  │
//! │  │  • Computer     │     │  • Layout       │     │  • Panels     │  │
//! │  │  • Settings     │     │                 │     │  • Structures │  │
//! │  └────────┬────────┘     └────────┬────────┘     └───────┬───────┘  │
//! │           │                       │                      │          │
//! │           │              ┌────────▼────────┐             │          │
//! │           └─────────────>│      Table      │<────────────┘          │
//! │                          │  (turn loop)    │                        │
//! │                          └────────┬────────┘                        │
//! │                                   ▼                                 │
//! │                              EventBus                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `events`: What happened at the table
//! - `table`: Game setup and the turn loop

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod events;
pub mod table;

pub use ants_core as core;
pub use ants_rendering as rendering;
pub use ants_rules as rules;
pub use ants_shared as shared;
pub use ants_ui as ui;

pub use error::{TableError, TableResult};
pub use events::{EventBus, EventReceiver, EventSender, TableEvent};
pub use table::{Table, TurnOutcome};
