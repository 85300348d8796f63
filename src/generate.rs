//! `create-flask-app` project tree generation
use error::{Result, ResultExt};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tmpl::ProjectTemplate;

/// Materializes a `ProjectTemplate` under a project root.
pub struct Generator<'a> {
    /// The project name, substituted into parameterized templates.
    name: &'a str,
    /// The project root directory.
    root: PathBuf,
    /// What to write.
    template: &'a ProjectTemplate,
}

impl<'a> Generator<'a> {
    /// Generate `template` into `<parent>/<name>`.
    pub fn new(parent: &Path, name: &'a str, template: &'a ProjectTemplate) -> Generator<'a> {
        Generator {
            name: name,
            root: parent.join(name),
            template: template,
        }
    }

    /// Get the `root` value.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the project root and every template directory.
    ///
    /// Directories that already exist are left as they are.
    pub fn create_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::with_capacity(self.template.dirs().len() + 1);
        created.push(self.root.clone());
        for dir in self.template.dirs() {
            created.push(self.path_of(dir));
        }

        for dir in &created {
            trace!("mkdir {}", dir.display());
            fs::create_dir_all(dir)
                .chain_err(|| format!("Unable to create directory '{}'", dir.display()))?;
        }
        Ok(created)
    }

    /// Write every template file, truncating files that already exist.
    pub fn write_files(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.template.files().len());
        for file in self.template.files() {
            let path = self.path_of(file.path());
            let body = file.render(self.name)?;
            trace!("write {} ({} bytes, named: {})",
                   path.display(),
                   body.len(),
                   file.parameterized());

            let out = OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(&path)
                .chain_err(|| format!("Unable to write '{}'", path.display()))?;
            let mut writer = BufWriter::new(out);
            writer.write_all(body.as_bytes())?;
            writer.flush()?;
            written.push(path);
        }
        Ok(written)
    }

    fn path_of(&self, relative: &str) -> PathBuf {
        relative.split('/').fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}

#[cfg(test)]
mod test {
    use super::Generator;
    use std::fs;
    use tempfile::tempdir;
    use tmpl::{ProjectTemplate, Variant};

    #[test]
    fn creates_every_listed_path() {
        let parent = tempdir().expect("tempdir");
        for variant in &[Variant::Basic, Variant::Swagger, Variant::Full] {
            let name = format!("{}-api", variant);
            let tmpl = variant.template();
            let gen = Generator::new(parent.path(), &name, &tmpl);

            gen.create_dirs().expect("dirs");
            gen.write_files().expect("files");

            let root = parent.path().join(&name);
            for dir in tmpl.dirs() {
                assert!(root.join(dir).is_dir(), "{}: {}", variant, dir);
            }
            for file in tmpl.files() {
                assert!(root.join(file.path()).is_file(), "{}: {}", variant, file.path());
            }
        }
    }

    #[test]
    fn returns_touched_paths_in_order() {
        let parent = tempdir().expect("tempdir");
        let tmpl = ProjectTemplate::basic();
        let gen = Generator::new(parent.path(), "demo", &tmpl);

        let dirs = gen.create_dirs().expect("dirs");
        assert_eq!(dirs[0], parent.path().join("demo"));
        assert_eq!(dirs.len(), tmpl.dirs().len() + 1);

        let files = gen.write_files().expect("files");
        assert_eq!(files[0], parent.path().join("demo").join("run.py"));
        assert_eq!(files.last(), Some(&parent.path().join("demo").join("README.md")));
    }

    #[test]
    fn name_is_substituted() {
        let parent = tempdir().expect("tempdir");
        let tmpl = ProjectTemplate::swagger();
        let gen = Generator::new(parent.path(), "orders", &tmpl);
        gen.create_dirs().expect("dirs");
        gen.write_files().expect("files");

        let readme = fs::read_to_string(gen.root().join("README.md")).expect("readme");
        assert!(readme.starts_with("# orders\n"));
        let dotenv = fs::read_to_string(gen.root().join(".env")).expect(".env");
        assert!(dotenv.contains("APP_NAME=orders\n"));
    }

    #[test]
    fn rerun_keeps_unrelated_files() {
        let parent = tempdir().expect("tempdir");
        let tmpl = ProjectTemplate::basic();
        let gen = Generator::new(parent.path(), "demo", &tmpl);
        gen.create_dirs().expect("dirs");
        gen.write_files().expect("files");

        let notes = gen.root().join("app").join("utils").join("notes.txt");
        fs::write(&notes, "keep me").expect("notes");
        fs::write(gen.root().join("run.py"), "print('edited')\n").expect("edit");

        gen.create_dirs().expect("dirs again");
        gen.write_files().expect("files again");

        assert_eq!(fs::read_to_string(&notes).expect("notes"), "keep me");
        let run = fs::read_to_string(gen.root().join("run.py")).expect("run.py");
        assert!(run.starts_with("from app import create_app\n"));
    }

    #[test]
    fn empty_templates_produce_empty_files() {
        let parent = tempdir().expect("tempdir");
        let tmpl = ProjectTemplate::basic();
        let gen = Generator::new(parent.path(), "demo", &tmpl);
        gen.create_dirs().expect("dirs");
        gen.write_files().expect("files");

        let models = gen.root().join("app").join("models").join("__init__.py");
        assert_eq!(fs::metadata(models).expect("models").len(), 0);
    }
}
