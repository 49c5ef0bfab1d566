// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration specs for the desk workspace.
//!
//! Spec files under `cli/` are registered as `[[test]]` targets of the
//! `desk` package so they run against the built binary.
