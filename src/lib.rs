/*
 * emolib - lib.rs
 *
 * This file is part of emolib.
 *
 * emolib is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * emolib is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with emolib. If not, see <http://www.gnu.org/licenses/>.
 */

#![deny(
    rustdoc::redundant_explicit_links,
    unsafe_op_in_unsafe_fn,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::rc_buffer,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
    clippy::borrow_as_ptr,
    clippy::case_sensitive_file_extension_comparisons,
    clippy::unused_enumerate_index,
    clippy::unnecessary_fallible_conversions,
    clippy::struct_field_names,
    clippy::manual_hash_one,
    clippy::into_iter_without_iter
)]
#![allow(
    clippy::option_if_let_else,
    clippy::missing_const_for_fn,
    clippy::multiple_crate_versions,
    clippy::cognitive_complexity
)]
#![doc = include_str!("../README.md")]
//!
//! ## Description
//!
//! A crate that detects emoji in plain text and converts them between
//! representations:
//! - Scan text for emoji sequences, longest match first, with trailing skin
//!   tone modifiers attached (see [`EmojiCatalog::unicode_candidates`])
//! - Replace emoji with `:alias:` tokens or HTML numeric character
//!   references, and turn both back into unicode (see module [`parser`])
//! - Load records from the builtin catalog or your own JSON document (see
//!   module [`catalog`])
//! - Decide per conversion what happens to skin tone modifiers (see
//!   [`FitzpatrickAction`])
//!
//! There is no global state: every operation is a method on an
//! [`EmojiCatalog`] you construct and share yourself.

pub mod catalog;
pub use catalog::*;
pub mod error;
pub use error::*;
pub mod fitzpatrick;
pub use fitzpatrick::*;
pub mod parser;
pub use parser::*;
pub mod trie;
pub use trie::*;

#[macro_use]
extern crate serde_derive;
pub extern crate log;
/* parser */
pub extern crate nom;

pub extern crate indexmap;
pub extern crate smallvec;
