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

use std::collections::BTreeMap;

const SEPARATOR: char = '.';

/// A field mask compiled into a tree.
///
/// Each node maps field names (or map keys) to the mask applied to that
/// field. A node without children is a leaf: it selects the whole field. For
/// example, the paths `["user.name", "photo"]` compile into:
///
/// ```norust
///     user  -> name -> (leaf)
///     photo -> (leaf)
/// ```
///
/// A `NestedMask` holds no references to any message. Compile it once and
/// apply it to as many messages as needed, from as many threads as needed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NestedMask(BTreeMap<String, NestedMask>);

impl NestedMask {
    /// Compiles a list of dot-separated paths into a mask.
    ///
    /// Paths sharing a prefix are merged. Compilation is best-effort: a path
    /// stops contributing at its first empty segment (a leading, trailing or
    /// doubled `.`), keeping any nodes it already added. Use
    /// [validate][crate::validate()] to reject such paths instead.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_fieldmask::NestedMask;
    /// let mask = NestedMask::from_paths(["user.name", "user.user_id", "photo"]);
    /// let user = mask.get("user").unwrap();
    /// assert!(user.get("name").is_some_and(NestedMask::is_leaf));
    /// assert!(mask.get("photo").is_some_and(NestedMask::is_leaf));
    /// ```
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mask = Self::default();
        for path in paths {
            mask.add(path.as_ref());
        }
        mask
    }

    fn add(&mut self, path: &str) {
        if path.is_empty() {
            tracing::trace!("dropping the remainder of a field mask path, it is empty");
            return;
        }
        let (head, rest) = match path.split_once(SEPARATOR) {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        if head.is_empty() {
            tracing::trace!(path, "dropping field mask path with an empty segment");
            return;
        }
        match rest {
            None => {
                self.0.insert(head.to_string(), Self::default());
            }
            Some(rest) => self.0.entry(head.to_string()).or_default().add(rest),
        }
    }

    /// Returns true if the mask has no entries.
    ///
    /// An empty root mask selects nothing in particular, [filter][Self::filter]
    /// and [prune][Self::prune] treat it as a no-op.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if this node selects the whole field.
    ///
    /// This is the same as [is_empty][Self::is_empty], spelled the way it reads
    /// when looking at a child node.
    pub fn is_leaf(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of entries at this level of the mask.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the mask for the field (or map key) called `name`.
    pub fn get(&self, name: &str) -> Option<&NestedMask> {
        self.0.get(name)
    }

    /// Iterates over the entries at this level of the mask, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NestedMask)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K> FromIterator<(K, NestedMask)> for NestedMask
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, NestedMask)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
