use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Local image inventory: level dir -> category -> lower-cased `.png` file names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTree {
    levels: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl ImageTree {
    /// Walk `root/<level>/<category>/` and collect image file names.
    ///
    /// Files directly under the root or a level directory are ignored, and so is
    /// anything nested below a category directory.
    pub fn scan(root: &Path) -> io::Result<Self> {
        let mut levels = BTreeMap::new();

        for level in subdirectories(root)? {
            let mut categories = BTreeMap::new();

            for category in subdirectories(&root.join(&level))? {
                let images = png_files(&root.join(&level).join(&category))?;
                categories.insert(category, images);
            }

            levels.insert(level, categories);
        }

        let tree = Self { levels };
        tracing::debug!("Scanned {} images under {}", tree.total(), root.display());
        Ok(tree)
    }

    /// Image names for a level directory and category; empty when either is absent
    pub fn images(&self, level_dir: &str, category: &str) -> &[String] {
        self.levels
            .get(level_dir)
            .and_then(|categories| categories.get(category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, level_dir: &str, category: &str, file_name: &str) -> bool {
        self.images(level_dir, category)
            .iter()
            .any(|name| name == file_name)
    }

    pub fn total(&self) -> usize {
        self.levels
            .values()
            .flat_map(|categories| categories.values())
            .map(Vec::len)
            .sum()
    }
}

fn subdirectories(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // Follows symlinks, unlike DirEntry::file_type
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn png_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        // Suffix match is case-sensitive; the stored name is lower-cased
        if name.ends_with(".png") && entry.path().is_file() {
            names.push(name.to_lowercase());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn collects_two_levels_of_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("A1/Animals/Cat.png"));
        touch(&root.join("A1/Animals/dog.png"));
        touch(&root.join("A1/Animals/notes.txt"));
        touch(&root.join("A1/Animals/LOUD.PNG"));
        touch(&root.join("A1/Animals/extra/deep.png"));
        touch(&root.join("A1/stray.png"));
        touch(&root.join("readme.png"));
        fs::create_dir_all(root.join("B2/Health")).unwrap();

        let tree = ImageTree::scan(root).unwrap();
        assert_eq!(tree.images("A1", "Animals"), ["cat.png", "dog.png"]);
        assert!(tree.contains("A1", "Animals", "cat.png"));
        assert!(tree.images("B2", "Health").is_empty());
        assert!(tree.images("C1", "Sport").is_empty());
        assert_eq!(tree.total(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_images_and_categories_are_followed() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store");
        touch(&store.join("cat.png"));
        touch(&store.join("sport/ball.png"));

        let root = dir.path().join("images");
        fs::create_dir_all(root.join("A1/Animals")).unwrap();
        symlink(store.join("cat.png"), root.join("A1/Animals/cat.png")).unwrap();
        symlink(store.join("sport"), root.join("A1/Sport")).unwrap();
        // Dangling links are not images
        symlink(store.join("gone.png"), root.join("A1/Animals/gone.png")).unwrap();

        let tree = ImageTree::scan(&root).unwrap();
        assert_eq!(tree.images("A1", "Animals"), ["cat.png"]);
        assert_eq!(tree.images("A1", "Sport"), ["ball.png"]);
        assert_eq!(tree.total(), 2);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ImageTree::scan(&dir.path().join("absent")).is_err());
    }
}
