use crate::domain::AppError;
use crate::ports::GitPort;
use git2::{ConfigLevel, ErrorCode, Repository};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git access for the working directory.
///
/// Index, commit, config and remote bookkeeping go through libgit2; push shells
/// out to the `git` CLI so the user's credential helpers and SSH agent apply.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::open(&self.root)
            .map_err(|e| AppError::git("git2::Repository::open", e.message()))
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, AppError> {
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd.unwrap_or(&self.root));

        let display = format!("git {}", args.join(" "));
        let output = command.output().map_err(|e| AppError::git(&display, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: display,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Resolve `path` to a path relative to the repository workdir.
    fn relative_to_workdir(&self, repo: &Repository, path: &Path) -> Result<PathBuf, AppError> {
        let command = format!("git add {}", path.display());
        let workdir = repo
            .workdir()
            .ok_or_else(|| AppError::git(&command, "repository has no working directory"))?
            .canonicalize()
            .map_err(|e| AppError::git(&command, e))?;

        let absolute = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };
        let absolute = absolute
            .canonicalize()
            .map_err(|e| AppError::git(&command, format!("pathspec did not match: {e}")))?;

        absolute.strip_prefix(&workdir).map(Path::to_path_buf).map_err(|_| {
            AppError::git(
                &command,
                format!("{} is outside repository {}", absolute.display(), workdir.display()),
            )
        })
    }
}

impl GitPort for GitCommandAdapter {
    fn set_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        let repo = self.repo()?;
        let command = format!("git config {key}");
        let mut config = repo
            .config()
            .and_then(|c| c.open_level(ConfigLevel::Local))
            .map_err(|e| AppError::git(&command, e.message()))?;
        config.set_str(key, value).map_err(|e| AppError::git(&command, e.message()))
    }

    fn stage(&self, path: &Path) -> Result<(), AppError> {
        let repo = self.repo()?;
        let rel_path = self.relative_to_workdir(&repo, path)?;

        let mut index =
            repo.index().map_err(|e| AppError::git("git2::Repository::index", e.message()))?;
        index
            .add_path(&rel_path)
            .map_err(|e| AppError::git(format!("git2::Index::add_path {:?}", rel_path), e.message()))?;
        index.write().map_err(|e| AppError::git("git2::Index::write", e.message()))
    }

    fn commit(&self, message: &str) -> Result<String, AppError> {
        let repo = self.repo()?;
        let mut index =
            repo.index().map_err(|e| AppError::git("git2::Repository::index", e.message()))?;

        let tree_id =
            index.write_tree().map_err(|e| AppError::git("git2::Index::write_tree", e.message()))?;
        let tree = repo
            .find_tree(tree_id)
            .map_err(|e| AppError::git("git2::Repository::find_tree", e.message()))?;

        let signature = repo
            .signature()
            .map_err(|e| AppError::git("git2::Repository::signature", e.message()))?;

        let parents = match repo.head() {
            Ok(head) => {
                let commit = head
                    .peel_to_commit()
                    .map_err(|e| AppError::git("git2::Reference::peel_to_commit", e.message()))?;
                vec![commit]
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => vec![],
            Err(e) => return Err(AppError::git("git2::Repository::head", e.message())),
        };

        let parents_refs: Vec<&git2::Commit> = parents.iter().collect();

        let oid = repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents_refs)
            .map_err(|e| AppError::git("git2::Repository::commit", e.message()))?;

        Ok(oid.to_string())
    }

    fn remote_url(&self, name: &str) -> Result<Option<String>, AppError> {
        let repo = self.repo()?;
        match repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(str::to_string)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(AppError::git(format!("git remote get-url {name}"), e.message())),
        }
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        let repo = self.repo()?;
        repo.remote(name, url)
            .map(|_| ())
            .map_err(|e| AppError::git(format!("git remote add {name} {url}"), e.message()))
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.run(&["push", remote, branch], None)?;
        Ok(())
    }
}
