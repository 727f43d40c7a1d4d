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

use prost_reflect::{Kind, MessageDescriptor, ReflectMessage};

/// Indicates a field mask path that does not match the message schema.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// The path is empty, or has a leading, trailing, or doubled `.`.
    #[error("field mask path {path:?} has an empty segment")]
    EmptySegment { path: String },

    /// A segment of the path does not name a field of the message.
    #[error("field mask path {path:?} is invalid: {message} has no field named {segment:?}")]
    UnknownField {
        path: String,
        segment: String,
        message: String,
    },

    /// A segment of the path follows a field that has no sub-fields, such as
    /// a string field or a map with scalar values.
    #[error(
        "field mask path {path:?} is invalid: cannot select {segment:?}, {field} has no sub-fields"
    )]
    NotAMessage {
        path: String,
        segment: String,
        field: String,
    },
}

/// Verifies that all the `paths` are valid for `msg`.
///
/// Each segment in a path must name a field of the current message type:
///
/// - Segments after a message field, or a repeated message field, are looked
///   up in that message type.
/// - The segment after a map field is a map key and is not checked. Segments
///   after the key are looked up in the map value type.
/// - Fields in a `oneof` are regular fields, the name of the `oneof` itself
///   cannot be used.
///
/// An empty list of paths is valid. Returns the error for the first invalid
/// path.
///
/// # Example
/// ```
/// # use google_cloud_fieldmask::{validate, ValidationError};
/// # fn sample(profile: &prost_reflect::DynamicMessage) -> Result<(), ValidationError> {
/// validate(profile, &["user.name", "attributes.some-key.tags"])?;
/// # Ok(()) }
/// ```
pub fn validate<M, S>(msg: &M, paths: &[S]) -> Result<(), ValidationError>
where
    M: ReflectMessage + ?Sized,
    S: AsRef<str>,
{
    let descriptor = msg.descriptor();
    paths
        .iter()
        .try_for_each(|path| validate_path(&descriptor, path.as_ref()))
}

fn validate_path(root: &MessageDescriptor, path: &str) -> Result<(), ValidationError> {
    // `None` once the walk reaches a field without sub-fields.
    let mut current = Some(root.clone());
    // The field that ended the walk, for error messages.
    let mut last = String::new();
    let mut segments = path.split('.');
    while let Some(segment) = segments.next() {
        check_segment(path, segment)?;
        let Some(message) = current.take() else {
            return Err(ValidationError::NotAMessage {
                path: path.to_string(),
                segment: segment.to_string(),
                field: last,
            });
        };
        let Some(field) = message.get_field_by_name(segment) else {
            return Err(ValidationError::UnknownField {
                path: path.to_string(),
                segment: segment.to_string(),
                message: message.full_name().to_string(),
            });
        };
        last = field.full_name().to_string();
        let kind = match field.kind() {
            Kind::Message(entry) if field.is_map() => {
                // The next segment, if any, is the map key.
                if let Some(key) = segments.next() {
                    check_segment(path, key)?;
                }
                entry.map_entry_value_field().kind()
            }
            kind => kind,
        };
        current = kind.as_message().cloned();
    }
    Ok(())
}

fn check_segment(path: &str, segment: &str) -> Result<(), ValidationError> {
    if segment.is_empty() {
        return Err(ValidationError::EmptySegment {
            path: path.to_string(),
        });
    }
    Ok(())
}
