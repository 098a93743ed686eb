use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to create or regenerate the texture behind a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cannot create a {width}x{height} texture")]
    EmptyTexture { width: u32, height: u32 },
    #[error("unable to load image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot rasterize empty text")]
    EmptyText,
}

/// The surfaces a scene loads at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Windmill,
    Regulator,
    WindFan,
    Prompt(usize),
    PowerReadout,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceKind::Windmill => write!(f, "windmill"),
            SurfaceKind::Regulator => write!(f, "regulator"),
            SurfaceKind::WindFan => write!(f, "wind fan"),
            SurfaceKind::Prompt(index) => write!(f, "prompt {}", index + 1),
            SurfaceKind::PowerReadout => write!(f, "power readout"),
        }
    }
}

/// Every surface that failed to load, in load order.
#[derive(Debug, Error)]
#[error("failed to load {} surface(s): {}", failures.len(), describe(failures))]
pub struct LoadError {
    pub failures: Vec<(SurfaceKind, SurfaceError)>,
}

fn describe(failures: &[(SurfaceKind, SurfaceError)]) -> String {
    failures
        .iter()
        .map(|(kind, err)| format!("{kind} ({err})"))
        .collect::<Vec<_>>()
        .join(", ")
}
