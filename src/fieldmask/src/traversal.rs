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

//! Apply a [NestedMask] to messages.
//!
//! The three operations walk the mask and the message together. They assume
//! the mask is valid for the message type. Masks that are not, for example a
//! mask selecting sub-fields of a `string` field, are handled by treating the
//! offending node as a leaf. Unknown field names select nothing.

use crate::nested_mask::NestedMask;
use prost_reflect::{DynamicMessage, FieldDescriptor, Kind, MapKey, ReflectMessage, Value};

impl NestedMask {
    /// Keeps the fields of `msg` listed in the mask and clears all the rest.
    ///
    /// If the mask is empty then all the fields are kept.
    ///
    /// - Maps keep only the entries whose key is listed in the mask. Nested
    ///   masks are applied to message values.
    /// - Repeated message fields apply the same nested mask to every element.
    /// - Fields in a `oneof` are treated as regular fields: if the field set in
    ///   the `oneof` is not listed it is cleared.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_fieldmask::NestedMask;
    /// # use prost_reflect::DynamicMessage;
    /// # fn sample(profile: &mut DynamicMessage) {
    /// let mask = NestedMask::from_paths(["user.name", "photo.path"]);
    /// mask.filter(profile);
    /// # }
    /// ```
    pub fn filter(&self, msg: &mut DynamicMessage) {
        if self.is_empty() {
            return;
        }
        for field in present_fields(msg) {
            let Some(sub) = self.get(field.name()) else {
                msg.clear_field(&field);
                continue;
            };
            if selects_whole(&field, sub) {
                continue;
            }
            match msg.get_field_mut(&field) {
                Value::Message(m) => sub.filter(m),
                Value::List(items) => items
                    .iter_mut()
                    .filter_map(Value::as_message_mut)
                    .for_each(|m| sub.filter(m)),
                Value::Map(entries) => entries.retain(|key, value| {
                    let Some(child) = sub.get(&key_name(key)) else {
                        return false;
                    };
                    if let Value::Message(m) = value {
                        child.filter(m);
                    }
                    true
                }),
                _ => {}
            }
        }
    }

    /// Clears the fields of `msg` listed in the mask.
    ///
    /// All other fields are kept untouched. If the mask is empty no fields are
    /// cleared.
    ///
    /// - Maps only change the entries whose key is listed in the mask. Those
    ///   entries are removed, unless the mask has nested fields for a message
    ///   value, in which case the nested mask is applied to the value.
    /// - Repeated message fields apply the same nested mask to every element.
    pub fn prune(&self, msg: &mut DynamicMessage) {
        if self.is_empty() {
            return;
        }
        for field in present_fields(msg) {
            let Some(sub) = self.get(field.name()) else {
                continue;
            };
            if selects_whole(&field, sub) {
                msg.clear_field(&field);
                continue;
            }
            match msg.get_field_mut(&field) {
                Value::Message(m) => sub.prune(m),
                Value::List(items) => items
                    .iter_mut()
                    .filter_map(Value::as_message_mut)
                    .for_each(|m| sub.prune(m)),
                Value::Map(entries) => entries.retain(|key, value| {
                    let Some(child) = sub.get(&key_name(key)) else {
                        return true;
                    };
                    match value {
                        Value::Message(m) if !child.is_leaf() => {
                            child.prune(m);
                            true
                        }
                        _ => false,
                    }
                }),
                _ => {}
            }
        }
    }

    /// Copies the fields listed in the mask from `src` into `dest`.
    ///
    /// Fields of `dest` not listed in the mask are left untouched. A listed
    /// field that is not set in `src` is cleared in `dest`.
    ///
    /// - Maps copy the listed entries present in `src`. Entries present in
    ///   `src` but not listed are removed from `dest`. Entries only present in
    ///   `dest` are kept.
    /// - Repeated message fields are paired by position: `dest` is truncated
    ///   to the length of `src`, and each element of `src` is copied into the
    ///   element of `dest` at the same index.
    ///
    /// Both messages must have the same type, otherwise nothing is copied.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_fieldmask::NestedMask;
    /// # use prost_reflect::DynamicMessage;
    /// # fn sample(update: &DynamicMessage, stored: &mut DynamicMessage) {
    /// let mask = NestedMask::from_paths(["user.name", "photo"]);
    /// mask.overwrite(update, stored);
    /// # }
    /// ```
    pub fn overwrite(&self, src: &DynamicMessage, dest: &mut DynamicMessage) {
        let descriptor = dest.descriptor();
        if src.descriptor() != descriptor {
            tracing::warn!(
                src = src.descriptor().full_name(),
                dest = descriptor.full_name(),
                "cannot overwrite a message with a message of a different type"
            );
            return;
        }
        for (name, sub) in self.iter() {
            let Some(field) = descriptor.get_field_by_name(name) else {
                tracing::debug!(
                    message_type = descriptor.full_name(),
                    field = name,
                    "ignoring unknown field in field mask"
                );
                continue;
            };
            if selects_whole(&field, sub) {
                if src.has_field(&field) {
                    dest.set_field(&field, src.get_field(&field).into_owned());
                } else {
                    dest.clear_field(&field);
                }
                continue;
            }
            let value = src.get_field(&field);
            match (&*value, dest.get_field_mut(&field)) {
                (Value::Message(s), Value::Message(d)) => sub.overwrite(s, d),
                (Value::List(s), Value::List(d)) => overwrite_list(sub, s, d),
                (Value::Map(s), Value::Map(d)) => {
                    for (key, value) in s {
                        let Some(child) = sub.get(&key_name(key)) else {
                            d.remove(key);
                            continue;
                        };
                        let copy = match value {
                            Value::Message(m) if !child.is_leaf() => {
                                let mut fresh = DynamicMessage::new(m.descriptor());
                                child.overwrite(m, &mut fresh);
                                Value::Message(fresh)
                            }
                            _ => value.clone(),
                        };
                        d.insert(key.clone(), copy);
                    }
                }
                _ => {}
            }
        }
    }
}

fn overwrite_list(mask: &NestedMask, src: &[Value], dest: &mut Vec<Value>) {
    dest.truncate(src.len());
    for (i, item) in src.iter().enumerate() {
        // Only message lists get here, but keep `dest[i]` paired with `src[i]`.
        let Value::Message(s) = item else {
            match dest.get_mut(i) {
                Some(d) => *d = item.clone(),
                None => dest.push(item.clone()),
            }
            continue;
        };
        if i >= dest.len() {
            dest.push(Value::Message(DynamicMessage::new(s.descriptor())));
        }
        if let Some(d) = dest[i].as_message_mut() {
            mask.overwrite(s, d);
        }
    }
}

/// Returns the fields set in `msg`.
///
/// The mutating operations need the list before they start changing `msg`.
fn present_fields(msg: &DynamicMessage) -> Vec<FieldDescriptor> {
    msg.fields()
        .map(|(field, _)| field)
        .filter(|field| msg.has_field(field))
        .collect()
}

/// Returns true if `sub` selects the whole `field`.
///
/// That is the case for leaves, and for nested masks on fields that have no
/// sub-fields to select.
fn selects_whole(field: &FieldDescriptor, sub: &NestedMask) -> bool {
    if sub.is_leaf() {
        return true;
    }
    if field.is_map() || matches!(field.kind(), Kind::Message(_)) {
        return false;
    }
    tracing::debug!(
        field = field.full_name(),
        "nested field mask on a field without sub-fields, selecting the whole field"
    );
    true
}

/// The name of a map key as it appears in field mask paths.
fn key_name(key: &MapKey) -> String {
    match key {
        MapKey::Bool(v) => v.to_string(),
        MapKey::I32(v) => v.to_string(),
        MapKey::I64(v) => v.to_string(),
        MapKey::U32(v) => v.to_string(),
        MapKey::U64(v) => v.to_string(),
        MapKey::String(v) => v.clone(),
    }
}
