//! Development tasks for essay-grade.
//!
//! ```text
//! cargo run -p xtask -- man --out target/man
//! cargo run -p xtask -- completions --out target/completions
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "essay-grade development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand.
    Man {
        /// Output directory.
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts.
    Completions {
        /// Output directory.
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
        /// Only generate for this shell.
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out, shell } => completions(&out, shell),
    }
}

fn man(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let cmd = essay_grade::command();
    clap_mangen::generate_to(cmd, out)
        .with_context(|| format!("failed to write man pages to {}", out.display()))?;
    println!("man pages written to {}", out.display());
    Ok(())
}

fn completions(out: &Path, shell: Option<Shell>) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let shells = shell.map_or_else(
        || vec![Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh],
        |s| vec![s],
    );
    for shell in shells {
        let mut cmd = essay_grade::command();
        let path = clap_complete::generate_to(shell, &mut cmd, "essay-grade", out)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
