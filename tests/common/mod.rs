//! Shared fixtures: a temporary project layout and fake bundler scripts.
#![allow(dead_code)]

use gatorshare_bundler::bundler::{Settings, SettingsBuilder, ToolSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary tree shaped like an installer checkout.
pub struct Fixture {
    _dir: TempDir,
    pub root: PathBuf,
}

impl Fixture {
    /// Creates library dirs, executables and runtime configs. Library dirs start empty.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();

        for sub in ["server/lib", "client/bin", "installer/etc/mono/2.0", "dist"] {
            fs::create_dir_all(root.join(sub)).unwrap();
        }
        fs::write(root.join("xsp2.exe"), "xsp host").unwrap();
        fs::write(root.join("client/bin/GSClient.exe"), "client").unwrap();
        fs::write(root.join("installer/etc/mono/2.0/machine.config"), "<config/>").unwrap();
        fs::write(root.join("installer/etc/mono/config"), "<config/>").unwrap();

        Self { _dir: dir, root }
    }

    pub fn server_lib(&self) -> PathBuf {
        self.root.join("server/lib")
    }

    pub fn client_bin(&self) -> PathBuf {
        self.root.join("client/bin")
    }

    pub fn server_bundle(&self) -> PathBuf {
        self.root.join("dist/gsserver")
    }

    pub fn client_bundle(&self) -> PathBuf {
        self.root.join("dist/gsclient")
    }

    pub fn server_bin(&self) -> PathBuf {
        self.root.join("dist/bin/xsp2.exe")
    }

    /// Creates an empty file at `rel` under the fixture root.
    pub fn touch(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        path
    }

    /// Settings pointing at the fixture, using `bundler` as the bundler program.
    pub fn settings(&self, bundler: &str) -> Settings {
        self.builder()
            .tools(ToolSettings {
                bundler: bundler.to_string(),
                ..Default::default()
            })
            .build()
            .unwrap()
    }

    /// Builder with every path set.
    pub fn builder(&self) -> SettingsBuilder {
        SettingsBuilder::new()
            .server_lib(self.server_lib())
            .server_bundle(self.server_bundle())
            .server_bin(self.server_bin())
            .xsp_exe(self.root.join("xsp2.exe"))
            .client_bin(self.client_bin())
            .client_bundle(self.client_bundle())
            .client_exe(self.root.join("client/bin/GSClient.exe"))
            .installer_etc(self.root.join("installer/etc"))
            .machine_config(self.root.join("installer/etc/mono/2.0/machine.config"))
            .sys_config(self.root.join("installer/etc/mono/config"))
    }

    /// Settings file with paths relative to the fixture root.
    pub fn write_settings_file(&self, bundler: &str) -> PathBuf {
        let path = self.root.join("bundle.toml");
        let content = format!(
            r#"[paths]
server_lib = "server/lib"
server_bundle = "dist/gsserver"
server_bin = "dist/bin/xsp2.exe"
xsp_exe = "xsp2.exe"
client_bin = "client/bin"
client_bundle = "dist/gsclient"
client_exe = "client/bin/GSClient.exe"
installer_etc = "installer/etc"
machine_config = "installer/etc/mono/2.0/machine.config"
sys_config = "installer/etc/mono/config"

[tools]
bundler = "{}"
"#,
            bundler
        );
        fs::write(&path, content).unwrap();
        path
    }

    /// Fake bundler that records its arguments and environment next to the
    /// output (`<out>.args`, `<out>.env`) and writes the bundle.
    #[cfg(unix)]
    pub fn recording_bundler(&self) -> PathBuf {
        self.script(
            "fake-mkbundle",
            r#"#!/bin/sh
out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then out="$arg"; fi
  prev="$arg"
done
mkdir -p "$(dirname "$out")"
printf '%s\n' "$@" > "$out.args"
printf '%s\n' "$MONO_OPTIONS" > "$out.env"
echo "bundled" > "$out"
echo "Compiling bundle for $out"
"#,
        )
    }

    /// Fake bundler that always fails.
    #[cfg(unix)]
    pub fn failing_bundler(&self) -> PathBuf {
        self.script(
            "broken-mkbundle",
            "#!/bin/sh\necho \"boom: assembly not found\" >&2\nexit 3\n",
        )
    }

    /// Fake bundler that prints a Latin-1 line followed by far more output
    /// than a pipe buffer holds, then writes the bundle.
    #[cfg(unix)]
    pub fn noisy_bundler(&self) -> PathBuf {
        self.script(
            "noisy-mkbundle",
            r#"#!/bin/sh
out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then out="$arg"; fi
  prev="$arg"
done
printf 'Caf\351\n'
printf 'Avertissement: r\351f\351rence\n' >&2
i=0
while [ $i -lt 5000 ]; do
  echo "resolving assembly $i of the dependency graph with some padding text"
  i=$((i + 1))
done
mkdir -p "$(dirname "$out")"
echo "bundled" > "$out"
"#,
        )
    }

    /// Fake bundler that succeeds without writing anything.
    #[cfg(unix)]
    pub fn silent_bundler(&self) -> PathBuf {
        self.script("silent-mkbundle", "#!/bin/sh\nexit 0\n")
    }

    #[cfg(unix)]
    fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.join("tools").join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

/// Reads a recorded argument list, one argument per line.
pub fn recorded_args(bundle: &Path) -> Vec<String> {
    let mut name = bundle.as_os_str().to_owned();
    name.push(".args");
    fs::read_to_string(PathBuf::from(name))
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}
