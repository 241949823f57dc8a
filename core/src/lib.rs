//! # ouisql core
//!
//! Converts a vendor MAC-prefix registry (Wireshark `manuf` format) into a
//! SQL script for a `vendor(prefix, name)` table.
//!
//! * **[`registry`]**: where the raw text comes from (HTTP or a local file).
//! * **[`parser`]**: text to tab separated rules.
//! * **[`table`]**: rules to an ordered prefix table, longer blocks overriding OUIs.
//! * **[`sql`]**: table to a transaction script.
//! * **[`converter`]**: the service tying the steps together.

pub mod converter;
pub mod error;
pub mod parser;
pub mod registry;
pub mod sql;
pub mod table;
