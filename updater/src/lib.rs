//! Serves update manifests for desktop application updaters, built from the
//! latest GitHub release of a single repository.
use rocket::{routes, Build, Rocket};

pub mod backend;
pub mod config;
pub mod error;
pub mod manifest;
pub mod platform;
pub mod release;
pub mod resolver;
pub mod routes;

pub use backend::Backend;
pub use config::{Config, ReleaseOrder, Repository};
pub use error::{Error, ErrorKind};
pub use manifest::Manifest;
pub use platform::PlatformKey;

/// What the server answers manifest requests with, decided once at startup.
pub enum Service {
    Ready {
        config: Config,
        backend: Box<dyn Backend>,
    },
    /// The configuration could not be loaded; every manifest request fails with `error`.
    Misconfigured { error: Error, detailed_errors: bool },
}

/// Mounts the updater routes with `service` as managed state.
pub fn server(service: Service) -> Rocket<Build> {
    rocket::build()
        .manage(service)
        .mount("/", routes![routes::index, routes::updater])
}
