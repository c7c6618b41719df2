//! Shared fixtures for pipeline tests.
//!
//! The real bundler is not assumed to be installed; tests drive the pipeline
//! with stub bundler scripts that mimic its observable contract (consume the
//! entry script, fabricate `dist/<name>`, leave a spec file behind).

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stand-in for a one-file bundler: validates the entry script, then
/// fabricates `dist/<name>` from its content.
const FAKE_BUNDLER: &str = r#"#!/bin/sh
name=""
prev=""
entry=""
for arg in "$@"; do
  if [ "$prev" = "--name" ]; then
    name="$arg"
  fi
  prev="$arg"
  entry="$arg"
done
if [ -z "$name" ]; then
  echo "missing --name" >&2
  exit 64
fi
if [ ! -f "$entry" ]; then
  echo "entry script not found: $entry" >&2
  exit 1
fi
mkdir -p build dist
cp "$entry" "dist/$name"
chmod 755 "dist/$name"
printf 'stub spec\n' > "$name.spec"
exit 0
"#;

/// Bundler that always fails, the way a real one does on an unsupported
/// script.
const FAILING_BUNDLER: &str = "#!/bin/sh\necho 'boom: unsupported script' >&2\nexit 2\n";

/// Writes an executable script into `dir` and returns its path.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    #[cfg(unix)]
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path
}

/// Creates the working stub bundler in `dir`.
pub fn fake_bundler(dir: &Path) -> PathBuf {
    write_script(dir, "fake-bundler", FAKE_BUNDLER)
}

/// Creates the always-failing stub bundler in `dir`.
pub fn failing_bundler(dir: &Path) -> PathBuf {
    write_script(dir, "failing-bundler", FAILING_BUNDLER)
}

/// Checks whether any executable bit is set on `path`.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
