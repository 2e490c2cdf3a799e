// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

//! Ontic — in-memory semantic model editing core.
//!
//! Builds a typed model graph (classes, definitions, properties, fields,
//! regions, headers, controls) from hierarchy and model-data payloads,
//! and applies undoable edit actions that produce changesets for backend
//! submission.

pub mod actions;
pub mod build;
pub mod link;
pub mod meta;
pub mod model;
pub mod payload;
pub mod store;
