//! provgen product metadata CLI
//!
//! Entry point for the `provgen-product` command-line tool. The CLI is the
//! outer-pipeline stand-in: it constructs the override store, resolves
//! metadata, and aborts the run on any fatal resolution error.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;

use provgen_product::{
    discover_packages, FsOverrideSource, OverrideStore, PackagePath, ProductMetadata, Resolver,
};

#[derive(Parser)]
#[command(name = "provgen-product")]
#[command(about = "Resolve per-package product metadata", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a package's product metadata and print every derived form
    Resolve {
        /// Specification root containing the package directories
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Package path relative to the specification root
        #[arg(long)]
        package: String,

        /// Title string carried by the package's API document
        #[arg(long)]
        title: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List the package paths discovered beneath a specification root
    Packages {
        /// Specification root to walk
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            root,
            package,
            title,
            json,
        } => {
            run_resolve(&root, package, &title, json);
        }
        Commands::Packages { root, json } => {
            run_packages(&root, json);
        }
    }
}

/// Everything the template layer derives from one resolved package.
#[derive(Debug, Serialize)]
struct MetadataReport {
    package_path: String,
    package_name: String,
    product_name: String,
    product_title_case: String,
    should_write_base_path: bool,
    base_path_identifier: String,
    base_path_title_case: String,
    base_path_upper_case: String,
    docs_section: String,
    client_package: String,
}

impl MetadataReport {
    fn build(metadata: &ProductMetadata, store: &OverrideStore) -> Result<Self, String> {
        let base_path = metadata
            .base_path_identifier(store)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            package_path: metadata.package_path.to_string(),
            package_name: metadata.package_name.to_string(),
            product_name: metadata.product_name.to_string(),
            product_title_case: metadata.product_name.to_title_case(),
            should_write_base_path: metadata
                .should_write_base_path(store)
                .map_err(|e| e.to_string())?,
            base_path_title_case: base_path.to_title_case(),
            base_path_upper_case: base_path.to_upper_case(),
            base_path_identifier: base_path.to_string(),
            docs_section: metadata
                .docs_section(store)
                .map_err(|e| e.to_string())?
                .to_string(),
            client_package: metadata.client_package().to_string(),
        })
    }

    fn to_human(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Package: {}\n", self.package_path));
        out.push_str(&format!("  Package name: {}\n", self.package_name));
        out.push_str(&format!(
            "  Product name: {} ({})\n",
            self.product_name, self.product_title_case
        ));
        out.push_str(&format!(
            "  Base path: {} ({}, {})\n",
            self.base_path_identifier, self.base_path_title_case, self.base_path_upper_case
        ));
        out.push_str(&format!(
            "  Write base path: {}\n",
            self.should_write_base_path
        ));
        out.push_str(&format!("  Docs section: {}\n", self.docs_section));
        out.push_str(&format!("  Client package: {}", self.client_package));
        out
    }
}

fn run_resolve(root: &Path, package: String, title: &str, json: bool) {
    let store = OverrideStore::new(FsOverrideSource::new(root));
    let resolver = Resolver::new(&store);

    let metadata = match resolver.resolve(title, PackagePath::new(package)) {
        Ok(metadata) => metadata,
        Err(e) => {
            eprintln!("Error resolving product metadata: {}", e);
            process::exit(1);
        }
    };

    let report = match MetadataReport::build(&metadata, &store) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error resolving product metadata: {}", e);
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", report.to_human());
    }
}

fn run_packages(root: &Path, json: bool) {
    let packages = match discover_packages(root) {
        Ok(packages) => packages,
        Err(e) => {
            eprintln!("Error discovering packages: {}", e);
            process::exit(1);
        }
    };

    if json {
        let paths: Vec<&str> = packages.iter().map(|p| p.as_str()).collect();
        match serde_json::to_string_pretty(&paths) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        for package in &packages {
            println!("{}", package);
        }
    }
}
