// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Field mask utilities for protocol buffer messages.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. We welcome feedback about the
//! APIs, documentation, missing features, bugs, etc.
//!
//! A field mask is a list of dot-separated field paths, such as
//! `user.name` or `photo.dimensions.width`. This crate applies field masks to
//! [DynamicMessage] values:
//!
//! * [NestedMask::filter] keeps the fields listed in the mask and clears all
//!   the rest.
//! * [NestedMask::prune] clears the fields listed in the mask and keeps all
//!   the rest.
//! * [NestedMask::overwrite] copies the fields listed in the mask from one
//!   message into another.
//!
//! Masks are compiled once into a [NestedMask] and can be reused for many
//! messages:
//!
//! ```
//! # use google_cloud_fieldmask::NestedMask;
//! # use prost_reflect::DynamicMessage;
//! # fn redact(users: &mut [DynamicMessage]) {
//! let mask = NestedMask::from_paths(["name", "photo.path"]);
//! for user in users.iter_mut() {
//!     mask.filter(user);
//! }
//! # }
//! ```
//!
//! The mutating operations assume the paths are valid for the message type.
//! Use [validate()] to reject bad paths before applying them, typically when the
//! paths come from an API request.
//!
//! Messages are represented using [prost_reflect]. Generated types that
//! implement [prost_reflect::ReflectMessage] can be used through
//! [NestedMask::filter_message] and friends.

mod field_mask;
pub use crate::field_mask::*;
mod field_numbers;
pub use crate::field_numbers::*;
mod nested_mask;
pub use crate::nested_mask::*;
mod traversal;
mod typed;
mod validate;
pub use crate::validate::*;

use prost_reflect::DynamicMessage;

/// Keeps the fields of `msg` listed in `paths` and clears all the rest.
///
/// If `paths` is empty then all the fields are kept. Use
/// [NestedMask::filter] directly when the same paths are applied to multiple
/// messages.
pub fn filter<I, S>(msg: &mut DynamicMessage, paths: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NestedMask::from_paths(paths).filter(msg)
}

/// Clears the fields of `msg` listed in `paths`.
///
/// All other fields are kept untouched. Use [NestedMask::prune] directly when
/// the same paths are applied to multiple messages.
pub fn prune<I, S>(msg: &mut DynamicMessage, paths: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NestedMask::from_paths(paths).prune(msg)
}

/// Copies the fields listed in `paths` from `src` into `dest`.
///
/// Use [NestedMask::overwrite] directly when the same paths are applied to
/// multiple messages.
pub fn overwrite<I, S>(src: &DynamicMessage, dest: &mut DynamicMessage, paths: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NestedMask::from_paths(paths).overwrite(src, dest)
}
