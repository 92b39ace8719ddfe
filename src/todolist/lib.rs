//! # Todolist Architecture
//!
//! Todolist is a small **model-view-controller** todo list. The library holds all of
//! it; the `todo` binary only picks a data directory, parses flags and hands stdin
//! and stdout to a [`session::Session`].
//!
//! ## The Three Components
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View (view/)                                               │
//! │  - Presenter: redraws the whole list on every notification  │
//! │  - GestureTranslator: gestures → intents                    │
//! └─────────────────────────────────────────────────────────────┘
//!            │ intents                        ▲ render(&[Todo])
//!            ▼                                │
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Coordinator (coordinator.rs)                               │
//! │  - IntentHandler: one intent → one store operation          │
//! │  - Registers the presenter as the store's observer          │
//! └─────────────────────────────────────────────────────────────┘
//!            │ create/update/toggle/delete    ▲ notification
//!            ▼                                │
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs)                                           │
//! │  - Owns the list, assigns ids, single observer slot         │
//! │  - Hands a snapshot to Persistence after every change       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persistence/)                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: gesture → coordinator → store mutation → notification →
//! render. Nothing calls back into the store from a render.
//!
//! ## Error Policy
//!
//! The store never fails. Blank text and unknown ids are ignored, and persistence
//! failures are logged and dropped. [`error::TodoError`] only surfaces while
//! starting up (config, templates) or from the persistence backends themselves.
//!
//! ## Threading
//!
//! Everything runs on one thread. The coordinator shares its presenter through
//! `Rc<RefCell<_>>`, so none of the wired types are `Send`.
//!
//! ## Module Overview
//!
//! - [`model`]: `Todo` and id type
//! - [`store`]: the list and its change notification
//! - [`persistence`]: snapshot storage trait and backends
//! - [`view`]: presenter and intent traits, render tree, terminal front end
//! - [`coordinator`]: wiring of store and view
//! - [`session`]: the interactive line loop
//! - [`config`]: configuration file
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types

pub mod config;
pub mod coordinator;
pub mod error;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod session;
pub mod store;
pub mod view;
