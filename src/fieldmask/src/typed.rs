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

//! Apply a [NestedMask] to generated messages.
//!
//! Generated types are converted to a [DynamicMessage][prost_reflect::DynamicMessage],
//! masked, and converted back.

use crate::nested_mask::NestedMask;
use prost::DecodeError;
use prost_reflect::ReflectMessage;

impl NestedMask {
    /// Like [filter][Self::filter] for any type implementing [ReflectMessage].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_fieldmask::NestedMask;
    /// # fn sample<T: prost_reflect::ReflectMessage + Default>(msg: &mut T) -> Result<(), prost::DecodeError> {
    /// NestedMask::from_paths(["name"]).filter_message(msg)?;
    /// # Ok(()) }
    /// ```
    pub fn filter_message<T>(&self, msg: &mut T) -> Result<(), DecodeError>
    where
        T: ReflectMessage + Default,
    {
        if self.is_empty() {
            return Ok(());
        }
        let mut dynamic = msg.transcode_to_dynamic();
        self.filter(&mut dynamic);
        *msg = dynamic.transcode_to()?;
        Ok(())
    }

    /// Like [prune][Self::prune] for any type implementing [ReflectMessage].
    pub fn prune_message<T>(&self, msg: &mut T) -> Result<(), DecodeError>
    where
        T: ReflectMessage + Default,
    {
        if self.is_empty() {
            return Ok(());
        }
        let mut dynamic = msg.transcode_to_dynamic();
        self.prune(&mut dynamic);
        *msg = dynamic.transcode_to()?;
        Ok(())
    }

    /// Like [overwrite][Self::overwrite] for any type implementing [ReflectMessage].
    pub fn overwrite_message<T>(&self, src: &T, dest: &mut T) -> Result<(), DecodeError>
    where
        T: ReflectMessage + Default,
    {
        let src = src.transcode_to_dynamic();
        let mut dynamic = dest.transcode_to_dynamic();
        self.overwrite(&src, &mut dynamic);
        *dest = dynamic.transcode_to()?;
        Ok(())
    }
}
