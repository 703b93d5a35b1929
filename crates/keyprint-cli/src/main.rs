use keyprint::config::{AppConfig, DigestMode};
use keyprint::OptionOverrides;
use tracing_subscriber::filter::LevelFilter;

const USAGE: &str = "uso: keyprint [--no-canvas] [--components] [--fallback]

  --no-canvas    excluye la muestra visual
  --components   imprime también el string canónico
  --fallback     usa el hash de respaldo aunque haya SHA-256";

#[derive(Debug, Default)]
struct CliArgs {
    no_canvas: bool,
    components: bool,
    fallback: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    for arg in args {
        match arg.as_str() {
            "--no-canvas" => cli.no_canvas = true,
            "--components" => cli.components = true,
            "--fallback" => cli.fallback = true,
            other => return Err(format!("argumento desconocido: {other}")),
        }
    }
    Ok(cli)
}

/// Logs a stderr. Nivel desde `KEYPRINT_LOG` o `RUST_LOG` (default `warn`).
fn init_logging() {
    let level = std::env::var("KEYPRINT_LOG").or_else(|_| std::env::var("RUST_LOG"))
                                             .ok()
                                             .and_then(|v| v.parse::<LevelFilter>().ok())
                                             .unwrap_or(LevelFilter::WARN);
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();
}

#[tokio::main]
async fn main() {
    // Cargar .env si existe (KEYPRINT_* y nivel de log)
    let _ = dotenvy::dotenv();
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return;
    }
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("[keyprint] {e}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let mut config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[keyprint] configuración inválida: {e}");
            std::process::exit(3);
        }
    };
    if cli.fallback {
        config.digest = DigestMode::Fallback;
    }

    let generator = keyprint::host_generator(&config);
    let overrides = if cli.no_canvas { OptionOverrides::use_canvas(false) } else { OptionOverrides::default() };

    if cli.components {
        let options = generator.resolve(Some(&overrides.to_value()));
        println!("{}", generator.components(&options).to_canonical_json());
    }
    println!("{}", generator.generate_with(&overrides).await);
}
