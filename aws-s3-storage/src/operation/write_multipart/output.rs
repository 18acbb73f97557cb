/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::Part;

/// Response type for uploading one part
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct WriteMultipartOutput {
    pub(crate) bytes_written: u64,
    pub(crate) part: Part,
}

impl WriteMultipartOutput {
    /// Number of bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// The uploaded part, to be passed to `complete_multipart`
    pub fn part(&self) -> &Part {
        &self.part
    }

    /// Consume the output and return the uploaded part
    pub fn into_part(self) -> Part {
        self.part
    }
}
