/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::Object;

/// Response type for writing an object
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct WriteOutput {
    pub(crate) bytes_written: u64,
    pub(crate) object: Object,
}

impl WriteOutput {
    /// Number of bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// The written object
    pub fn object(&self) -> &Object {
        &self.object
    }

    /// Consume the output and return the written object
    pub fn into_object(self) -> Object {
        self.object
    }
}
