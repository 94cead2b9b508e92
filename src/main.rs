use anyhow::{Result, bail};
use clap::Parser;
use pkgprov::commands::{self, Config, DEFAULT_PKG_CONF, Tools};
use pkgprov::runtime::RealRuntime;
use std::path::PathBuf;

/// pkgprov - package provider for pkg_info/pkg_add/pkg_delete
///
/// Installs, removes and reports packages using the system package tools.
///
/// Without --source, packages are installed from the installpath directive in
/// the package configuration file. A source ending in a path separator is a
/// repository directory and is passed through PKG_PATH; anything else is handed
/// to pkg_add as the package itself.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Package configuration file (also via PKGPROV_CONF)
    #[arg(
        long = "config",
        short = 'c',
        env = "PKGPROV_CONF",
        value_name = "PATH",
        default_value = DEFAULT_PKG_CONF,
        global = true
    )]
    pub pkg_conf: PathBuf,

    /// Path to pkg_info
    #[arg(long, env = "PKGPROV_PKG_INFO", value_name = "PATH", global = true)]
    pub pkg_info: Option<PathBuf>,

    /// Path to pkg_add
    #[arg(long, env = "PKGPROV_PKG_ADD", value_name = "PATH", global = true)]
    pub pkg_add: Option<PathBuf>,

    /// Path to pkg_delete
    #[arg(long, env = "PKGPROV_PKG_DELETE", value_name = "PATH", global = true)]
    pub pkg_delete: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List installed packages
    List(ListArgs),

    /// Print the installed version of a package
    Version(NameArgs),

    /// Print the installed state of a package
    Query(QueryArgs),

    /// Install a package
    Install(InstallArgs),

    /// Remove a package
    Uninstall(UninstallArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Print JSON instead of "name version" lines
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct NameArgs {
    #[arg(value_name = "PACKAGE")]
    pub name: String,
}

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    #[arg(value_name = "PACKAGE")]
    pub name: String,

    /// Print JSON instead of the bare version
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    #[arg(value_name = "PACKAGE")]
    pub name: String,

    /// Repository directory (ending in a separator) or package file/URL
    #[arg(long, short = 's', value_name = "SOURCE")]
    pub source: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct UninstallArgs {
    #[arg(value_name = "PACKAGE")]
    pub name: String,

    /// Also remove configuration files
    #[arg(long)]
    pub purge: bool,
}

impl Cli {
    fn tools(&self) -> Tools {
        let defaults = Tools::default();
        Tools {
            pkg_info: self.pkg_info.clone().unwrap_or(defaults.pkg_info),
            pkg_add: self.pkg_add.clone().unwrap_or(defaults.pkg_add),
            pkg_delete: self.pkg_delete.clone().unwrap_or(defaults.pkg_delete),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(RealRuntime)
        .with_tools(cli.tools())
        .with_pkg_conf(cli.pkg_conf.clone());

    match cli.command {
        Commands::List(args) => {
            let packages = commands::try_list(&config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&packages)?);
            } else {
                for package in packages {
                    println!(
                        "{} {}",
                        package.name,
                        package.version.as_deref().unwrap_or("(unknown)")
                    );
                }
            }
        }
        Commands::Version(args) => match commands::get_version(&config, &args.name) {
            Some(version) => println!("{}", version),
            None => bail!("Could not determine the version of {}", args.name),
        },
        Commands::Query(args) => {
            if let Some(result) = commands::query(&config, &args.name) {
                if args.json {
                    println!("{}", serde_json::to_string(&result)?);
                } else {
                    println!("{}", result.ensure);
                }
            }
        }
        Commands::Install(args) => {
            commands::install(&config, &args.name, args.source.as_deref())?
        }
        Commands::Uninstall(args) => commands::uninstall(&config, &args.name, args.purge)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_install_parsing() {
        let cli = Cli::try_parse_from(["pkgprov", "install", "bash"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.name, "bash");
                assert_eq!(args.source, None);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_install_source_parsing() {
        let cli =
            Cli::try_parse_from(["pkgprov", "install", "bash", "--source", "/one/   "]).unwrap();
        match cli.command {
            Commands::Install(args) => assert_eq!(args.source.as_deref(), Some("/one/   ")),
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_global_paths() {
        let cli = Cli::try_parse_from([
            "pkgprov",
            "--config",
            "/tmp/pkg.conf",
            "list",
            "--pkg-info",
            "/opt/pkg_info",
        ])
        .unwrap();
        assert_eq!(cli.pkg_conf, PathBuf::from("/tmp/pkg.conf"));

        let tools = cli.tools();
        assert_eq!(tools.pkg_info, PathBuf::from("/opt/pkg_info"));
        assert_eq!(tools.pkg_add, Tools::default().pkg_add);
    }

    #[test]
    fn test_cli_uninstall_purge_parsing() {
        let cli = Cli::try_parse_from(["pkgprov", "uninstall", "bash", "--purge"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => {
                assert_eq!(args.name, "bash");
                assert!(args.purge);
            }
            _ => panic!("Expected Uninstall command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["pkgprov", "bash"]).is_err());
    }
}
