//! Asset and shader-program collaborators
//!
//! Decoding meshes/textures and compiling programs belongs to the graphics
//! backend. The core only sees opaque handles, and every failure degrades to
//! an empty handle plus a log line instead of stopping the frame loop.

use std::path::{Path, PathBuf};

use crate::renderer::vertex::{FLOOR_VERTICES, Vertex};

pub const CUBE_MESH: &str = "resources/objects/cube/cube.obj";
pub const CAR_MESH: &str = "resources/objects/sportscar/sportsCar.obj";
pub const FLOOR_TEXTURE: &str = "resources/objects/textures/metal.png";

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("{program:?} program failed to build ({stage}): {log}")]
    ShaderCompile {
        program: ProgramKind,
        stage: &'static str,
        log: String,
    },
}

/// Backend mesh handle; id 0 is the empty mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mesh {
    pub id: u32,
    /// Vertices submitted per draw
    pub vertex_count: u32,
}

impl Mesh {
    pub const EMPTY: Self = Self {
        id: 0,
        vertex_count: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    pub const EMPTY: Self = Self(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProgramHandle(pub u32);

impl ProgramHandle {
    pub const EMPTY: Self = Self(0);
}

/// The three pipelines the scene needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    /// Vertex + fragment, textured/lit meshes
    Basic,
    /// Vertex + geometry + fragment, displaces faces by `explosionTime`
    Explosion,
    /// Point sprites sized by `pointSize`
    Particle,
}

/// Source files for one program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSources {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
    pub geometry: Option<PathBuf>,
}

impl ProgramKind {
    pub fn sources(self) -> ProgramSources {
        let (vertex, fragment, geometry) = match self {
            ProgramKind::Basic => ("shader/basic.vs", "shader/basic.fs", None),
            ProgramKind::Explosion => (
                "shader/explode.vs",
                "shader/explode.fs",
                Some("shader/explode.gs"),
            ),
            ProgramKind::Particle => ("shader/particle.vs", "shader/particle.fs", None),
        };
        ProgramSources {
            vertex: vertex.into(),
            fragment: fragment.into(),
            geometry: geometry.map(PathBuf::from),
        }
    }
}

/// Backend-side loader
pub trait AssetLoader {
    fn load_mesh(&mut self, path: &Path) -> Result<Mesh, AssetError>;
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, AssetError>;
    /// Upload an in-memory triangle list
    fn upload_mesh(&mut self, vertices: &[Vertex]) -> Mesh;
    fn compile_program(
        &mut self,
        kind: ProgramKind,
        sources: &ProgramSources,
    ) -> Result<ProgramHandle, AssetError>;
}

/// Programs by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Programs {
    pub basic: ProgramHandle,
    pub explosion: ProgramHandle,
    pub particle: ProgramHandle,
}

/// Every GPU-side resource the scene draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneAssets {
    pub cube: Mesh,
    pub car: Mesh,
    pub floor: Mesh,
    pub floor_texture: TextureHandle,
    pub programs: Programs,
}

impl SceneAssets {
    /// Load everything, substituting empty handles for whatever fails
    pub fn load(loader: &mut impl AssetLoader) -> Self {
        let cube = loader.load_mesh(Path::new(CUBE_MESH)).unwrap_or_else(|e| {
            log::error!("{e}");
            Mesh::EMPTY
        });
        let car = loader.load_mesh(Path::new(CAR_MESH)).unwrap_or_else(|e| {
            log::error!("{e}");
            Mesh::EMPTY
        });
        let floor_texture = loader
            .load_texture(Path::new(FLOOR_TEXTURE))
            .unwrap_or_else(|e| {
                log::error!("{e}");
                TextureHandle::EMPTY
            });
        let floor = loader.upload_mesh(&FLOOR_VERTICES);

        let mut compile = |kind: ProgramKind| {
            loader
                .compile_program(kind, &kind.sources())
                .unwrap_or_else(|e| {
                    log::error!("{e}");
                    ProgramHandle::EMPTY
                })
        };
        let programs = Programs {
            basic: compile(ProgramKind::Basic),
            explosion: compile(ProgramKind::Explosion),
            particle: compile(ProgramKind::Particle),
        };

        Self {
            cube,
            car,
            floor,
            floor_texture,
            programs,
        }
    }

    /// Number of handles that failed to load
    pub fn missing(&self) -> usize {
        [self.cube, self.car, self.floor]
            .iter()
            .filter(|m| m.is_empty())
            .count()
            + usize::from(self.floor_texture == TextureHandle::EMPTY)
            + [
                self.programs.basic,
                self.programs.explosion,
                self.programs.particle,
            ]
            .iter()
            .filter(|p| **p == ProgramHandle::EMPTY)
            .count()
    }
}

/// Loader for running without a GPU
///
/// Resolves paths against `root` and hands out fresh handles for files that
/// exist, so missing assets surface exactly as they would with a real backend.
#[derive(Debug)]
pub struct HeadlessLoader {
    root: PathBuf,
    next_id: u32,
}

impl HeadlessLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next_id: 1,
        }
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, AssetError> {
        let full = self.root.join(path);
        if full.is_file() {
            Ok(full)
        } else {
            Err(AssetError::NotFound(full))
        }
    }
}

impl AssetLoader for HeadlessLoader {
    fn load_mesh(&mut self, path: &Path) -> Result<Mesh, AssetError> {
        self.resolve(path)?;
        Ok(Mesh {
            id: self.next_id(),
            vertex_count: 0,
        })
    }

    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, AssetError> {
        self.resolve(path)?;
        Ok(TextureHandle(self.next_id()))
    }

    fn upload_mesh(&mut self, vertices: &[Vertex]) -> Mesh {
        Mesh {
            id: self.next_id(),
            vertex_count: vertices.len() as u32,
        }
    }

    fn compile_program(
        &mut self,
        kind: ProgramKind,
        sources: &ProgramSources,
    ) -> Result<ProgramHandle, AssetError> {
        let stages = [
            ("vertex", Some(&sources.vertex)),
            ("fragment", Some(&sources.fragment)),
            ("geometry", sources.geometry.as_ref()),
        ];
        for (stage, path) in stages {
            if let Some(path) = path {
                self.resolve(path).map_err(|e| AssetError::ShaderCompile {
                    program: kind,
                    stage,
                    log: e.to_string(),
                })?;
            }
        }
        Ok(ProgramHandle(self.next_id()))
    }
}
