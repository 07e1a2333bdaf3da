use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathGuardError {
    #[error("Path rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Resolves URL-style relative references inside a root directory.
#[derive(Debug)]
pub struct PathGuard;

impl PathGuard {
    /// Maps `reference` (e.g. `"data/guide.json?v=2"` or `"/guide.json"`) onto `root`.
    ///
    /// Query strings and fragments are dropped, a leading `/` is treated as root-relative,
    /// and `.` segments are ignored.
    ///
    /// # Errors
    /// Returns [`PathGuardError::Rejected`] for empty references, parent (`..`) segments,
    /// or drive/prefix components.
    pub fn resolve(root: &Path, reference: &str) -> Result<PathBuf, PathGuardError> {
        let cut = reference.find(['?', '#']).map_or(reference, |i| &reference[..i]);
        let trimmed = cut.trim().trim_start_matches('/');

        let mut resolved = root.to_path_buf();
        let mut depth = 0usize;
        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(part) => {
                    resolved.push(part);
                    depth += 1;
                },
                Component::CurDir => {},
                Component::ParentDir => {
                    return Err(PathGuardError::Rejected {
                        message: format!("'{reference}' escapes the root").into(),
                        context: Some("parent segment".into()),
                    });
                },
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathGuardError::Rejected {
                        message: format!("'{reference}' is not relative").into(),
                        context: None,
                    });
                },
            }
        }

        if depth == 0 {
            return Err(PathGuardError::Rejected {
                message: "empty reference".into(),
                context: Some(reference.to_owned().into()),
            });
        }
        Ok(resolved)
    }
}
