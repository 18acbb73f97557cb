/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use crate::error::{self, Error};

/// A single byte range for the HTTP `Range` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ByteRange {
    /// Both ends inclusive, e.g. `bytes=5-14`
    Inclusive(u64, u64),
    /// Everything from the offset to the end of the object, e.g. `bytes=5-`
    AllFrom(u64),
}

impl ByteRange {
    /// Build the range for an optional offset and an optional size.
    ///
    /// Returns `None` when neither is set so the full object is fetched.
    pub(crate) fn from_offset_size(
        offset: Option<u64>,
        size: Option<u64>,
    ) -> Result<Option<ByteRange>, Error> {
        let range = match (offset, size) {
            (_, Some(0)) => {
                return Err(error::invalid_input(
                    "read size must be greater than zero when set",
                ))
            }
            (Some(offset), Some(size)) => {
                let end = offset
                    .checked_add(size - 1)
                    .ok_or_else(|| error::invalid_input("read range overflows u64"))?;
                ByteRange::Inclusive(offset, end)
            }
            (Some(offset), None) => ByteRange::AllFrom(offset),
            (None, Some(size)) => ByteRange::Inclusive(0, size - 1),
            (None, None) => return Ok(None),
        };
        Ok(Some(range))
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteRange::Inclusive(start, end) => write!(f, "bytes={}-{}", start, end),
            ByteRange::AllFrom(start) => write!(f, "bytes={}-", start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ByteRange;
    use crate::error::ErrorKind;

    fn range(offset: Option<u64>, size: Option<u64>) -> Option<String> {
        ByteRange::from_offset_size(offset, size)
            .unwrap()
            .map(|r| r.to_string())
    }

    #[test]
    fn test_range_forms() {
        assert_eq!(Some("bytes=5-14".to_owned()), range(Some(5), Some(10)));
        assert_eq!(Some("bytes=5-".to_owned()), range(Some(5), None));
        assert_eq!(Some("bytes=0-9".to_owned()), range(None, Some(10)));
        assert_eq!(None, range(None, None));
        assert_eq!(Some("bytes=0-0".to_owned()), range(Some(0), Some(1)));
    }

    #[test]
    fn test_invalid_ranges() {
        let err = ByteRange::from_offset_size(Some(1), Some(0)).unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());

        let err = ByteRange::from_offset_size(Some(u64::MAX), Some(2)).unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
