//! Command dispatch: maps parsed CLI arguments onto services.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, SplitService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{CladeId, Taxonomy};
use crate::infrastructure::{MonolithFile, MonolithWriter, RecordSource};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;

    match &cli.command {
        Some(Commands::Split {
            monolith,
            core_out,
            remainder_out,
            clade,
            max_depth,
            sentinel,
            root,
        }) => split(
            &settings,
            monolith,
            core_out.as_deref(),
            remainder_out.as_deref(),
            clade.as_deref(),
            *max_depth,
            sentinel.as_deref(),
            root.as_deref(),
        ),
        Some(Commands::Tree {
            monolith,
            max_depth,
            sentinel,
        }) => tree(&settings, monolith, *max_depth, sentinel.as_deref()),
        Some(Commands::Stat { monolith, sentinel }) => {
            stat(&settings, monolith, sentinel.as_deref())
        }
        Some(Commands::Config { command }) => config_command(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[allow(clippy::too_many_arguments)]
#[instrument(skip_all)]
fn split(
    settings: &Settings,
    monolith: &Path,
    core_out: Option<&Path>,
    remainder_out: Option<&Path>,
    clade: Option<&str>,
    max_depth: Option<u32>,
    sentinel: Option<&str>,
    root: Option<&str>,
) -> CliResult<()> {
    let sentinel = sentinel.unwrap_or(&settings.sentinel);
    let max_depth = max_depth.unwrap_or(settings.max_depth);
    let clade = clade
        .or(settings.clade.as_deref())
        .ok_or_else(|| CliError::Usage("no override clade given (use --clade or config)".into()))?;
    let core_out = core_out.map_or_else(|| suffixed(monolith, ".a"), Path::to_path_buf);
    let remainder_out = remainder_out.map_or_else(|| suffixed(monolith, ".b"), Path::to_path_buf);
    debug!("split: clade={clade} max_depth={max_depth} sentinel={sentinel:?}");

    output::header("Splitting monolith...");
    let mut source = MonolithFile::new(monolith, sentinel);
    let mut core_sink = MonolithWriter::create(&core_out, sentinel)?;
    let mut remainder_sink = MonolithWriter::create(&remainder_out, sentinel)?;

    let mut service = SplitService::new(CladeId::from(clade), max_depth);
    if let Some(root) = root {
        service = service.with_root(CladeId::from(root));
    }
    let report = service.split(&mut source, &mut core_sink, &mut remainder_sink)?;

    output::action("root", &report.root);
    output::action(
        "core",
        &format!("{} nodes -> {}", report.core, core_out.display()),
    );
    output::action(
        "remainder",
        &format!("{} nodes -> {}", report.remainder, remainder_out.display()),
    );
    output::success(format!("split {} nodes", report.total).as_str());
    Ok(())
}

#[instrument(skip_all)]
fn tree(
    settings: &Settings,
    monolith: &Path,
    max_depth: Option<u32>,
    sentinel: Option<&str>,
) -> CliResult<()> {
    let sentinel = sentinel.unwrap_or(&settings.sentinel);
    let max_depth = max_depth.unwrap_or(settings.max_depth);

    let taxonomy = load_taxonomy(monolith, sentinel)?;
    let rendered = to_termtree(&taxonomy, taxonomy.root(), max_depth)?;
    output::info(&rendered);
    Ok(())
}

#[instrument(skip_all)]
fn stat(settings: &Settings, monolith: &Path, sentinel: Option<&str>) -> CliResult<()> {
    let sentinel = sentinel.unwrap_or(&settings.sentinel);
    let taxonomy = load_taxonomy(monolith, sentinel)?;

    let root = taxonomy.node(taxonomy.root()).map_err(ApplicationError::from)?;
    output::action("nodes", &taxonomy.len());
    output::action(
        "root",
        &format!("{} ({})", taxonomy.root(), root.name),
    );
    output::action("depth", &tree_depth(&taxonomy));
    Ok(())
}

fn config_command(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            let path = global_config_path().ok_or_else(|| {
                CliError::InvalidArgs("cannot determine config directory".into())
            })?;
            output::info(&path.display());
            Ok(())
        }
    }
}

fn load_taxonomy(monolith: &Path, sentinel: &str) -> CliResult<Taxonomy> {
    let records = MonolithFile::new(monolith, sentinel).scan()?;
    Ok(Taxonomy::build(records).map_err(ApplicationError::from)?)
}

/// Derive a default output path by appending a suffix to the input name.
fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Render the depth-bounded neighborhood of `id`. Recursion here is bounded
/// by the cutoff, not by the tree depth.
fn to_termtree(
    taxonomy: &Taxonomy,
    id: &CladeId,
    depth_left: u32,
) -> CliResult<termtree::Tree<String>> {
    let node = taxonomy.node(id).map_err(ApplicationError::from)?;
    let label = if node.name.is_empty() {
        id.to_string()
    } else {
        format!("{} ({})", node.name, id)
    };
    let mut leaves = Vec::new();
    if depth_left > 0 {
        for child in &node.children {
            leaves.push(to_termtree(taxonomy, child, depth_left - 1)?);
        }
    }
    Ok(termtree::Tree::new(label).with_leaves(leaves))
}

/// Maximum node depth, computed with an explicit stack.
fn tree_depth(taxonomy: &Taxonomy) -> u32 {
    let mut deepest = 0;
    let mut stack = vec![(taxonomy.root().clone(), 0u32)];
    while let Some((id, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        if let Some(node) = taxonomy.get(&id) {
            for child in &node.children {
                stack.push((child.clone(), depth + 1));
            }
        }
    }
    deepest
}
