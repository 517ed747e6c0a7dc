use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{entities::answers::AnswerSet, value_objects::Field};

/// The only file name readmegen ever writes.
pub const README_FILE_NAME: &str = "README.md";

/// Where the rendered document is written: a directory plus `README.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    directory: PathBuf,
    file: PathBuf,
}

impl TargetPath {
    /// Resolve a user-supplied directory.
    ///
    /// A single trailing `/` is stripped unless the directory is the root.
    pub fn resolve(directory: &str) -> Self {
        let directory = if directory == "/" {
            directory
        } else {
            directory.strip_suffix('/').unwrap_or(directory)
        };
        let directory = PathBuf::from(directory);
        let file = directory.join(README_FILE_NAME);
        Self { directory, file }
    }

    pub fn from_answers(answers: &AnswerSet) -> Self {
        Self::resolve(answers.get(Field::TargetDir))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_separator_is_stripped() {
        let target = TargetPath::resolve("./docs/");
        assert_eq!(target.to_string(), "./docs/README.md");
        assert_eq!(target.directory(), Path::new("./docs"));
    }

    #[test]
    fn root_is_not_stripped() {
        let target = TargetPath::resolve("/");
        assert_eq!(target.to_string(), "/README.md");
        assert_eq!(target.directory(), Path::new("/"));
    }

    #[test]
    fn only_one_separator_is_stripped() {
        let target = TargetPath::resolve("./docs//");
        assert_eq!(target.directory().as_os_str(), "./docs/");
        assert_eq!(target.file().file_name().unwrap(), README_FILE_NAME);
    }

    #[test]
    fn path_without_separator_is_kept() {
        let target = TargetPath::resolve("/tmp/project");
        assert_eq!(target.file(), Path::new("/tmp/project/README.md"));
    }

    #[test]
    fn resolves_from_answers() {
        let answers = AnswerSet::new().with(Field::TargetDir, "./output/Demo/");
        assert_eq!(
            TargetPath::from_answers(&answers).file(),
            Path::new("./output/Demo/README.md")
        );
    }
}
