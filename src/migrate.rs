use log::*;
use std::path::{Path, PathBuf};

use crate::convert::convert_post;
use crate::error::{Error, Result};
use crate::markdown::MarkdownRenderer;
use crate::naming::output_name;

/// Expands each argument as a glob pattern, unless it names an existing
/// path. Arguments matching nothing are kept verbatim so that they fail, and
/// get reported, like any other input.
pub fn expand_inputs(args: &[String]) -> Vec<PathBuf> {
    args.iter()
        .flat_map(|arg| {
            if Path::new(arg).exists() {
                return vec![PathBuf::from(arg)];
            }
            let matched = glob::glob(arg)
                .map(|paths| paths.filter_map(std::result::Result::ok).collect::<Vec<_>>())
                .unwrap_or_default();
            if matched.is_empty() {
                vec![PathBuf::from(arg)]
            } else {
                matched
            }
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct Report {
    pub converted: Vec<(PathBuf, PathBuf)>,
    pub failed: Vec<(PathBuf, Error)>,
}

pub struct Migrator {
    out_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl Migrator {
    /// Fails with `OutputDirectoryMissing` unless `out_dir` is an existing directory.
    pub fn new(out_dir: PathBuf, renderer: MarkdownRenderer) -> Result<Migrator> {
        if !out_dir.is_dir() {
            return Err(Error::OutputDirectoryMissing(out_dir));
        }
        Ok(Migrator { out_dir, renderer })
    }

    /// Converts every input in order. A failing input is logged and recorded
    /// in the report; it never stops the batch.
    pub fn run(&self, inputs: &[PathBuf]) -> Report {
        let mut report = Report::default();
        for input in inputs {
            match self.migrate_file(input) {
                Ok(out_file) => report.converted.push((input.clone(), out_file)),
                Err(e) => {
                    error!("Error processing {}: {}", input.display(), e);
                    report.failed.push((input.clone(), e));
                }
            }
        }
        info!(
            "Converted {} posts, {} failed",
            report.converted.len(),
            report.failed.len()
        );
        report
    }

    fn migrate_file(&self, input: &Path) -> Result<PathBuf> {
        let out_file = self.out_dir.join(output_name(input)?);
        info!("Process {} ==> {}", input.display(), out_file.display());
        let post = std::fs::read_to_string(input)?;
        let doc = convert_post(&post, &self.renderer)?;
        write_atomic(&out_file, &doc)?;
        Ok(out_file)
    }
}

/// Writes to a hidden sibling first so a failed write leaves nothing at `path`.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_file_name(format!(
        ".{}.tmp",
        path.file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default()
    ));
    let written = std::fs::write(&tmp, contents).and_then(|_| std::fs::rename(&tmp, path));
    if written.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    Ok(written?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn post(title: &str) -> String {
        format!(
            r#"<h2><a>{title}</a></h2>
<div class="post">
<p>Body of {title}</p>
<!-- end -->
<div class="discussion"><p>This entry was posted at 8:15 am on 9 June 2011 and is filed under <span class="tag"><a>Misc</a></span>.</p></div>
</div>"#
        )
    }

    fn input(root: &Path, slug: &str, html: &str) -> PathBuf {
        let dir = root.join("2011").join("06").join("09").join(slug);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("index.html");
        fs::write(&path, html).unwrap();
        path
    }

    #[test]
    fn missing_output_directory() {
        let src = tempfile::tempdir().unwrap();
        let missing = src.path().join("nope");
        assert!(matches!(
            Migrator::new(missing, MarkdownRenderer::default()),
            Err(Error::OutputDirectoryMissing(_))
        ));

        let file = src.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            Migrator::new(file, MarkdownRenderer::default()),
            Err(Error::OutputDirectoryMissing(_))
        ));
    }

    #[test]
    fn batch_continues_past_failures() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let inputs = vec![
            input(src.path(), "first", &post("First")),
            input(src.path(), "broken", "<div class=\"post\"><p>no title</p></div>"),
            input(src.path(), "third", &post("Third")),
        ];

        let migrator = Migrator::new(out.path().to_path_buf(), MarkdownRenderer::default()).unwrap();
        let report = migrator.run(&inputs);

        assert_eq!(
            report.converted,
            vec![
                (inputs[0].clone(), out.path().join("2011-06-first.md")),
                (inputs[2].clone(), out.path().join("2011-06-third.md")),
            ]
        );
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, inputs[1]);
        assert!(matches!(report.failed[0].1, Error::MissingTitle));

        let first = fs::read_to_string(out.path().join("2011-06-first.md")).unwrap();
        assert!(first.starts_with("---\n"), "{first}");
        assert!(first.contains("Body of First"), "{first}");
        assert!(!out.path().join("2011-06-broken.md").exists());

        let mut names = fs::read_dir(out.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, vec!["2011-06-first.md", "2011-06-third.md"]);
    }

    #[test]
    fn batch_reports_unnamable_and_unreadable_inputs() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let inputs = vec![
            PathBuf::from("short.html"),
            src.path().join("2011/06/09/missing/index.html"),
        ];

        let migrator = Migrator::new(out.path().to_path_buf(), MarkdownRenderer::default()).unwrap();
        let report = migrator.run(&inputs);

        assert!(report.converted.is_empty());
        assert!(matches!(report.failed[0].1, Error::PathTooShort(_)));
        assert!(matches!(report.failed[1].1, Error::Io(_)));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn rerun_overwrites_with_identical_output() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let inputs = vec![input(src.path(), "again", &post("Again"))];
        let migrator = Migrator::new(out.path().to_path_buf(), MarkdownRenderer::default()).unwrap();

        migrator.run(&inputs);
        let once = fs::read(out.path().join("2011-06-again.md")).unwrap();
        migrator.run(&inputs);
        let twice = fs::read(out.path().join("2011-06-again.md")).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn expand_inputs_test() {
        let src = tempfile::tempdir().unwrap();
        let a = input(src.path(), "a", &post("A"));
        let b = input(src.path(), "b", &post("B"));
        let pattern = format!("{}/2011/06/09/*/index.html", src.path().display());
        let literal = "does/not/exist.html".to_string();

        assert_eq!(
            expand_inputs(&[pattern, literal.clone()]),
            vec![a, b, PathBuf::from(&literal)]
        );
        assert_eq!(expand_inputs(&["[".to_string()]), vec![PathBuf::from("[")]);
    }

    #[test]
    fn expand_inputs_prefers_existing_literal_path() {
        let src = tempfile::tempdir().unwrap();
        let bracketed = input(src.path(), "post[1]", &post("Bracketed"));
        let other = input(src.path(), "post1", &post("Other"));

        let arg = bracketed.display().to_string();
        assert_eq!(expand_inputs(&[arg]), vec![bracketed]);

        let pattern = format!("{}/2011/06/09/post[1]/index.html", src.path().display());
        let _ = fs::remove_file(src.path().join("2011/06/09/post[1]/index.html"));
        assert_eq!(expand_inputs(&[pattern]), vec![other]);
    }
}
