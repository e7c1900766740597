//! dotd: persistence and command-line shell around the [`canvas`] engine.
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Environment-driven process configuration |
//! | [`services::store`] | Canvas JSON and image media on disk |
//! | [`services::persistence`] | Background worker with a completion channel |
//! | [`services::collection`] | Listing, creating and deleting canvases |
//! | [`state`] | UI-thread session tying an engine to the worker |
//! | [`cli`] | `dotd` subcommands |

pub mod cli;
pub mod config;
pub mod services;
pub mod state;
