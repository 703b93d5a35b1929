//! keyprint-adapters: implementaciones de host para los contratos del core.
//!
//! Este crate provee:
//! - `HostMetricsSource`: métricas básicas leídas del host, completadas con
//!   `ProfileOverrides` para los valores que un proceso no puede conocer por
//!   sí mismo, como la resolución de pantalla.
//! - `CanvasSampler`: dibuja la escena de referencia sobre una superficie
//!   privada y devuelve su data URL, o `""` si algo falla.
//! - `HeadlessSurface`: superficie de software determinista.
//! - `Sha256Digest`: primitiva SHA-256 para el camino primario del hasher.

pub mod canvas;
pub mod digest;
pub mod metrics;

pub use canvas::{CanvasSampler, HeadlessSurface, HeadlessSurfaceFactory, Surface2d, SurfaceError, SurfaceFactory};
pub use digest::Sha256Digest;
pub use metrics::{HostMetricsSource, HostProfile, ProfileOverrides};
