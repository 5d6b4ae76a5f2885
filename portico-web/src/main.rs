//! Portico Web Server
//!
//! Backend for the EnterpriseSaaS console: credential validation, a
//! persistent session and role-gated admin and user areas.

use clap::Parser;
use portico_core::logging::{init_logging, LogFormat, LoggingConfig};
use portico_web::server::PorticoServerBuilder;
use portico_web::WebConfig;
use std::path::PathBuf;

/// Portico Web Server - role-gated console backend
#[derive(Parser)]
#[command(name = "portico-web")]
#[command(about = "Backend for the EnterpriseSaaS console")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Server port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable development mode
    #[arg(long)]
    dev: bool,

    /// Directory for the persisted session record
    #[arg(long)]
    session_dir: Option<PathBuf>,

    /// Credential validation delay in milliseconds
    #[arg(long)]
    validation_delay_ms: Option<u64>,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging first
    std::env::set_var(
        "RUST_LOG",
        format!("portico_web={},tower_http=debug", args.log_level),
    );
    // RUST_LOG already carries the per-crate directives
    let logging = LoggingConfig {
        level: args.log_level.clone(),
        format: if args.dev {
            LogFormat::Pretty
        } else {
            LogFormat::Compact
        },
        filter_directives: vec![],
        ..Default::default()
    };
    if let Err(e) = init_logging(&logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    println!("🔧 Starting Portico Web Server initialization...");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Create web configuration
    let mut config = match &args.config {
        Some(path) => match WebConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        },
        None => WebConfig::from_env(),
    };

    // Override with command line arguments
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.dev {
        config.dev_mode = true;
    }
    if let Some(session_dir) = args.session_dir {
        config.session_dir = Some(session_dir);
    }
    if let Some(delay) = args.validation_delay_ms {
        config.validation_delay_ms = Some(delay);
    }

    // Print startup information
    println!("🚀 Starting Portico Web Server");
    println!("📍 Server: http://{}:{}", config.host, config.port);
    println!("🔧 Development mode: {}", config.dev_mode);

    if let Some(session_dir) = &config.session_dir {
        println!("💾 Session directory: {}", session_dir.display());
    }

    // Build and start the server
    println!("🏗️  Building server...");
    let mut builder = PorticoServerBuilder::new()
        .host(config.host.clone())
        .port(config.port)
        .dev_mode(config.dev_mode);
    if let Some(session_dir) = config.session_dir.clone() {
        builder = builder.session_dir(session_dir);
    }
    if let Some(delay) = config.validation_delay_ms {
        builder = builder.validation_delay_ms(delay);
    }

    let server = match builder.build().await {
        Ok(server) => {
            println!("✅ Server built successfully");
            server
        }
        Err(e) => {
            eprintln!("❌ Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    // Start the server (this will block until shutdown)
    println!("🚀 Starting server...");
    if let Err(e) = server.start().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }

    println!("✅ Server shut down gracefully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        use clap::Parser;

        // Test default values
        let args = Args::parse_from(["portico-web"]);
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert!(!args.dev);
        assert_eq!(args.log_level, "info");

        // Test custom values
        let args = Args::parse_from([
            "portico-web",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--dev",
            "--validation-delay-ms",
            "0",
        ]);
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(3000));
        assert!(args.dev);
        assert_eq!(args.validation_delay_ms, Some(0));
    }
}
