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

use prost_reflect::ReflectMessage;

/// Converts field numbers of `msg` into field mask paths.
///
/// The paths are returned in the same order as the numbers, duplicates
/// included. Numbers that do not match any field of `msg` are skipped.
///
/// Field numbers are unsigned, so negative numbers cannot be expressed. Zero
/// is never a valid field number and is skipped like any other unknown
/// number.
///
/// # Example
/// ```
/// # use google_cloud_fieldmask::paths_from_field_numbers;
/// # fn sample(user: &prost_reflect::DynamicMessage) {
/// // With `message User { int64 user_id = 1; string name = 2; }`
/// let paths = paths_from_field_numbers(user, [1, 2]);
/// assert_eq!(paths, vec!["user_id", "name"]);
/// # }
/// ```
pub fn paths_from_field_numbers<M, I>(msg: &M, numbers: I) -> Vec<String>
where
    M: ReflectMessage + ?Sized,
    I: IntoIterator<Item = u32>,
{
    let descriptor = msg.descriptor();
    numbers
        .into_iter()
        .filter_map(|number| {
            let field = descriptor.get_field(number);
            if field.is_none() {
                tracing::trace!(
                    message_type = descriptor.full_name(),
                    number,
                    "skipping unknown field number"
                );
            }
            field
        })
        .map(|field| field.name().to_string())
        .collect()
}
