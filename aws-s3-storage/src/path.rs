/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Maps storage relative paths to S3 keys and back.
///
/// The key prefix is the working directory with a single leading `/` removed. Paths are joined
/// verbatim: `..` segments and repeated separators are not normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathMapper {
    prefix: String,
}

impl PathMapper {
    pub(crate) fn new(work_dir: &str) -> Self {
        let prefix = work_dir.strip_prefix('/').unwrap_or(work_dir);
        Self {
            prefix: prefix.to_owned(),
        }
    }

    /// The S3 key for a storage path
    pub(crate) fn abs_path(&self, path: &str) -> String {
        let mut key = String::with_capacity(self.prefix.len() + path.len());
        key.push_str(&self.prefix);
        key.push_str(path);
        key
    }

    /// The storage path for an S3 key. Keys outside of the working directory are returned as is.
    pub(crate) fn rel_path<'a>(&self, key: &'a str) -> &'a str {
        key.strip_prefix(self.prefix.as_str()).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::PathMapper;

    #[test]
    fn test_abs_path() {
        let mapper = PathMapper::new("/data/");
        assert_eq!("data/a/b.txt", mapper.abs_path("a/b.txt"));
        assert_eq!("data/", mapper.abs_path(""));

        // only one leading separator is removed, nothing is normalized
        let mapper = PathMapper::new("//data/");
        assert_eq!("/data/../x", mapper.abs_path("../x"));

        let root = PathMapper::new("/");
        assert_eq!("a/b.txt", root.abs_path("a/b.txt"));
    }

    #[test]
    fn test_rel_path_without_prefix_is_unchanged() {
        let mapper = PathMapper::new("/data/");
        assert_eq!("other/key", mapper.rel_path("other/key"));
        assert_eq!("a", mapper.rel_path("data/a"));
    }

    #[test]
    fn test_round_trip() {
        let paths = ["", "a", "a/b/c.bin", "dir/", "with space/ü.txt", "a//b"];
        for work_dir in ["/", "/work/", "work/", "/nested/work/dir/"] {
            let mapper = PathMapper::new(work_dir);
            for path in paths {
                assert_eq!(path, mapper.rel_path(&mapper.abs_path(path)), "{work_dir} {path}");
            }
        }
    }
}
