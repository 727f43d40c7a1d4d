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

use crate::nested_mask::NestedMask;
use std::collections::BTreeSet;

/// `FieldMask` represents a set of symbolic field paths, for example:
///
/// ```norust
///     paths: "f.a"
///     paths: "f.b.d"
/// ```
///
/// Here `f` represents a field in some root message, `a` and `b`
/// fields in the message found in `f`, and `d` a field found in the
/// message in `f.b`.
///
/// Field masks are used to specify a subset of fields that should be
/// returned by a get operation or modified by an update operation. Use
/// [nested_mask][FieldMask::nested_mask] to compile the paths, and then apply
/// the result with [NestedMask::filter] (projections) or
/// [NestedMask::overwrite] (updates).
///
/// # JSON Encoding of Field Masks
///
/// In JSON, a field mask is encoded as a single string where paths are
/// separated by a comma:
///
/// ```norust
///     "user.display_name,photo"
/// ```
///
/// # Field Masks and Oneof Fields
///
/// Field masks treat fields in oneofs just as regular fields. The oneof name
/// itself cannot be used in paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Set the paths.
    pub fn set_paths<T, V>(mut self, paths: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the canonical form of this mask.
    ///
    /// The paths are sorted and de-duplicated. Empty paths are removed, and so
    /// are paths covered by another path in the mask: `a` covers `a.b`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_fieldmask::FieldMask;
    /// let mask = FieldMask::default().set_paths(["photo.path", "user", "photo", "user.name"]);
    /// assert_eq!(mask.normalize().paths, vec!["photo", "user"]);
    /// ```
    pub fn normalize(self) -> Self {
        let all = self
            .paths
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<BTreeSet<_>>();
        let paths = all
            .iter()
            .filter(|p| !is_covered(&all, p))
            .cloned()
            .collect();
        Self { paths }
    }

    /// Compiles the paths into a [NestedMask].
    pub fn nested_mask(&self) -> NestedMask {
        NestedMask::from_paths(&self.paths)
    }
}

/// Returns true if a proper prefix of `path`, ending at a `.`, is in `all`.
fn is_covered(all: &BTreeSet<String>, path: &str) -> bool {
    path.match_indices('.')
        .any(|(i, _)| all.contains(&path[..i]))
}

impl From<&FieldMask> for NestedMask {
    fn from(value: &FieldMask) -> Self {
        value.nested_mask()
    }
}

impl From<prost_types::FieldMask> for FieldMask {
    fn from(value: prost_types::FieldMask) -> Self {
        FieldMask::default().set_paths(value.paths)
    }
}

impl From<FieldMask> for prost_types::FieldMask {
    fn from(value: FieldMask) -> Self {
        prost_types::FieldMask { paths: value.paths }
    }
}

/// Implement [`serde`](::serde) serialization for [FieldMask]
impl serde::ser::Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.paths.join(","))
    }
}

/// Implement [`serde`](::serde) deserialization for [FieldMask]
impl<'de> serde::de::Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let paths = deserializer.deserialize_str(PathVisitor)?;
        Ok(FieldMask { paths })
    }
}

struct PathVisitor;

impl serde::de::Visitor<'_> for PathVisitor {
    type Value = Vec<String>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with comma-separated field mask paths")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(value.split(',').map(str::to_string).collect())
        }
    }
}
