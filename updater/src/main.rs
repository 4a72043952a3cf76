use std::{env, process};

use updater::backend::github::{self, Github};
use updater::{config, Config, Service};

#[rocket::main]
async fn main() {
    let service = match Config::from_env() {
        Ok(cfg) => match Github::new(github::Config::from(&cfg)) {
            Ok(backend) => {
                println!(
                    "Serving manifests for {} (release order: {:?})",
                    cfg.repository, cfg.release_order
                );
                Service::Ready {
                    config: cfg,
                    backend: Box::new(backend),
                }
            }
            Err(error) => Service::Misconfigured {
                detailed_errors: cfg.detailed_errors,
                error,
            },
        },
        Err(error) => Service::Misconfigured {
            detailed_errors: config::detailed_errors_from_lookup(|key| env::var(key).ok()),
            error,
        },
    };

    if let Service::Misconfigured { error, .. } = &service {
        eprintln!("{}; manifest requests will fail", error.chain());
    }

    if let Err(e) = updater::server(service).launch().await {
        eprintln!("Rocket failed to launch: {}", e);
        process::exit(1);
    }
}
