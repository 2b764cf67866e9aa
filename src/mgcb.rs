//! Content.mgcb generation
//!
//! Walks the content directory tree, classifies every asset file by
//! extension and emits the manifest the MonoGame content builder consumes.
//! The manifest is rebuilt from scratch on every run; there is no
//! incremental mode.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory names that are never descended into
const EXCLUDED_DIRS: [&str; 5] = [".git", "__pycache__", ".vs", "obj", "bin"];

/// File suffixes belonging to the build tooling itself, not assets
const EXCLUDED_SUFFIXES: [&str; 3] = [".mgcb", ".csproj", ".sln"];

/// Asset category, in manifest section order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Texture,
    Sound,
    Data,
}

/// Importer/processor pair selected for one extension
#[derive(Debug, Clone, Copy)]
struct Rule {
    importer: &'static str,
    processor: &'static str,
    category: Category,
}

const TEXTURE: Rule = Rule {
    importer: "TextureImporter",
    processor: "TextureProcessor",
    category: Category::Texture,
};

/// Pass-through: the asset is copied into build output unmodified
const PASS_THROUGH: Rule = Rule {
    importer: "PassThroughImporter",
    processor: "PassThroughProcessor",
    category: Category::Data,
};

/// Extension -> rule table. Keys are lowercase and unique. Lookup falls
/// back to [`PASS_THROUGH`] for anything absent, so classification is
/// total: no file is ever dropped.
static RULES: [(&str, Rule); 13] = [
    ("png", TEXTURE),
    ("jpg", TEXTURE),
    ("jpeg", TEXTURE),
    (
        "wav",
        Rule {
            importer: "WavImporter",
            processor: "SoundEffectProcessor",
            category: Category::Sound,
        },
    ),
    (
        "ogg",
        Rule {
            importer: "OggImporter",
            processor: "SoundEffectProcessor",
            category: Category::Sound,
        },
    ),
    (
        "wem",
        Rule {
            importer: "WemImporter",
            processor: "SoundEffectProcessor",
            category: Category::Sound,
        },
    ),
    ("json", PASS_THROUGH),
    ("xml", PASS_THROUGH),
    ("bin", PASS_THROUGH),
    ("obj", PASS_THROUGH),
    ("export", PASS_THROUGH),
    ("data", PASS_THROUGH),
    ("meta", PASS_THROUGH),
];

/// Pick the rule for a filename.
///
/// The extension is the text after the final `.`, matched case-insensitively.
/// A filename without a `.` has the empty extension and takes the default.
fn classify(filename: &str) -> &'static Rule {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    RULES
        .iter()
        .find(|(key, _)| *key == ext)
        .map(|(_, rule)| rule)
        .unwrap_or(&PASS_THROUGH)
}

/// One discovered asset file
#[derive(Debug)]
pub struct AssetEntry {
    /// Path relative to the content root, forward-slash separated
    pub rel_path: String,
    pub category: Category,
    pub importer: &'static str,
    pub processor: &'static str,
}

/// Errors from manifest generation
#[derive(Debug)]
pub enum MgcbError {
    /// Content root does not exist or is not a directory
    MissingContentDir(PathBuf),
    /// Filesystem failure while scanning or writing
    Io(String),
}

impl fmt::Display for MgcbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MgcbError::MissingContentDir(path) => {
                write!(f, "content directory not found: {}", path.display())
            }
            MgcbError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for MgcbError {}

impl From<std::io::Error> for MgcbError {
    fn from(e: std::io::Error) -> Self {
        MgcbError::Io(e.to_string())
    }
}

/// Entry counts and output size, for operator reporting only
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub textures: usize,
    pub sounds: usize,
    pub data: usize,
    /// Size of the written manifest in bytes
    pub bytes: u64,
}

impl Report {
    pub fn total(&self) -> usize {
        self.textures + self.sounds + self.data
    }
}

const PREAMBLE: &str = "\
#----------------------------- Global Properties ----------------------------#

/outputDir:bin/$(Platform)
/intermediateDir:obj/$(Platform)
/platform:Android

#-------------------------------- References --------------------------------#

/reference:../Celeste.Core/bin/$(Configuration)/net9.0/Celeste.Core.dll

#---------------------------------- Content ---------------------------------#

";

const TEXTURES_HEADER: &str =
    "\n#-------------------------------- Textures --------------------------------#\n";
const SOUNDS_HEADER: &str =
    "\n#-------------------------------- Sounds ----------------------------------#\n";
const DATA_HEADER: &str =
    "\n#-------------------------------- Data -----------------------------------#\n";

const FOOTER: &str = "
#----------------------------------- Fonts -----------------------------------#

/importer:FontDescriptionImporter
/processor:FontDescriptionProcessor
/processorParam:TextureFormat=Compressed

#-------------------------------- Build Flags --------------------------------#

/compress
";

/// Generate the manifest for the tree under `content_dir` and write it to
/// `output_file`, creating parent directories and overwriting as needed.
///
/// The whole manifest is assembled in memory and written in one call, so a
/// failed run never leaves a partial file behind.
pub fn generate(content_dir: &Path, output_file: &Path) -> Result<Report, MgcbError> {
    if !content_dir.is_dir() {
        return Err(MgcbError::MissingContentDir(content_dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    collect_entries(content_dir, content_dir, &mut entries)?;

    let manifest = assemble(&entries);

    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_file, &manifest)?;

    Ok(Report {
        textures: count(&entries, Category::Texture),
        sounds: count(&entries, Category::Sound),
        data: count(&entries, Category::Data),
        bytes: manifest.len() as u64,
    })
}

fn count(entries: &[AssetEntry], category: Category) -> usize {
    entries.iter().filter(|e| e.category == category).count()
}

/// Depth-first walk: the directory's own files first, then each
/// subdirectory, both in sorted name order for deterministic output.
/// Excluded directory names are pruned entirely, at any depth.
fn collect_entries(
    root: &Path,
    dir: &Path,
    entries: &mut Vec<AssetEntry>,
) -> Result<(), MgcbError> {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if path.is_dir() {
            if !EXCLUDED_DIRS.contains(&name.as_str()) {
                subdirs.push(path);
            }
        } else if !EXCLUDED_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            files.push((name, path));
        }
    }

    files.sort();
    subdirs.sort();

    for (name, path) in files {
        let rule = classify(&name);
        entries.push(AssetEntry {
            rel_path: relative_path(root, &path),
            category: rule.category,
            importer: rule.importer,
            processor: rule.processor,
        });
    }

    for subdir in subdirs {
        collect_entries(root, &subdir, entries)?;
    }

    Ok(())
}

/// Path relative to the content root, forward-slash separated regardless of
/// the host platform. Case is preserved.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Render one manifest block.
///
/// `TextureFormat=Compressed` is emitted for every entry, sounds and
/// pass-through data included. The content builder ignores the parameter
/// for non-texture processors; the blanket line keeps the output
/// byte-identical to the manifests already in the project.
fn render_entry(entry: &AssetEntry) -> String {
    format!(
        "#begin {path}\n/importer:{importer}\n/processor:{processor}\n/processorParam:TextureFormat=Compressed\n/build:{path}\n",
        path = entry.rel_path,
        importer = entry.importer,
        processor = entry.processor,
    )
}

/// Assemble the full manifest: preamble, one section per non-empty category
/// in Texture/Sound/Data order, then the fixed fonts and build-flags footer.
/// An empty category contributes nothing, not even its header.
fn assemble(entries: &[AssetEntry]) -> String {
    let mut textures = String::new();
    let mut sounds = String::new();
    let mut data = String::new();

    for entry in entries {
        let block = render_entry(entry);
        match entry.category {
            Category::Texture => textures.push_str(&block),
            Category::Sound => sounds.push_str(&block),
            Category::Data => data.push_str(&block),
        }
    }

    let mut manifest = String::from(PREAMBLE);
    for (header, section) in [
        (TEXTURES_HEADER, &textures),
        (SOUNDS_HEADER, &sounds),
        (DATA_HEADER, &data),
    ] {
        if !section.is_empty() {
            manifest.push_str(header);
            manifest.push_str(section);
        }
    }
    manifest.push_str(FOOTER);
    manifest
}
