use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use log::{info, warn};
use rp_app::prefs::{load_prefs, AppPrefs};
use rp_app::state::AppState;
use rp_core::workspace::Workspace;

/// Pair reStructuredText paragraphs with gettext messages by hand.
#[derive(Parser, Debug)]
#[command(name = "rst2po", version)]
struct Cli {
    /// Opens BASENAME.rst and BASENAME.po
    basename: Option<String>,
    /// Translated reStructuredText document
    #[arg(long, value_name = "FILE")]
    rst: Option<PathBuf>,
    /// Translation catalog to fill in
    #[arg(long, value_name = "FILE")]
    po: Option<PathBuf>,
    /// Output directory created next to the .po file
    #[arg(long, value_name = "NAME")]
    merged_dir: Option<String>,
    /// Title of the rubric that starts the footnote section
    #[arg(long, value_name = "TEXT")]
    footnote_rubric: Option<String>,
}

impl Cli {
    fn workspace(&self) -> anyhow::Result<Workspace> {
        let mut workspace = match (&self.basename, &self.rst, &self.po) {
            (Some(basename), _, _) => Workspace::from_basename(basename),
            (None, Some(rst), Some(po)) => Workspace {
                rst_path: rst.clone(),
                po_path: po.clone(),
            },
            _ => bail!("rst2po needs one filename without extension, or both --rst and --po"),
        };
        if let Some(rst) = &self.rst {
            workspace.rst_path = rst.clone();
        }
        if let Some(po) = &self.po {
            workspace.po_path = po.clone();
        }
        Ok(workspace)
    }

    fn apply_to(&self, prefs: &mut AppPrefs) {
        if let Some(dir) = &self.merged_dir {
            prefs.merged_dir = dir.clone();
        }
        if let Some(rubric) = &self.footnote_rubric {
            prefs.footnote_rubric = rubric.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let cli = Cli::parse();
    let workspace = cli.workspace()?;

    let mut prefs = load_prefs().unwrap_or_else(|err| {
        warn!("ignoring preferences: {err}");
        AppPrefs::default()
    });
    cli.apply_to(&mut prefs);

    let mut state = AppState::with_prefs(prefs);
    state
        .open(workspace)
        .context("could not open the document pair")?;
    info!("{}", state.file_status);

    rp_app::launch(state).map_err(|err| anyhow::anyhow!("window failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn t_cli_001_basename_opens_pair() {
        let cli = Cli::try_parse_from(["rst2po", "docs/intro"]).expect("parse");
        let ws = cli.workspace().expect("workspace");
        assert_eq!(ws.rst_path, Path::new("docs/intro.rst"));
        assert_eq!(ws.po_path, Path::new("docs/intro.po"));
    }

    #[test]
    fn t_cli_002_explicit_paths_override_basename() {
        let cli = Cli::try_parse_from(["rst2po", "intro", "--po", "hu/intro.po"]).expect("parse");
        let ws = cli.workspace().expect("workspace");
        assert_eq!(ws.rst_path, Path::new("intro.rst"));
        assert_eq!(ws.po_path, Path::new("hu/intro.po"));
    }

    #[test]
    fn t_cli_003_needs_a_document() {
        let cli = Cli::try_parse_from(["rst2po", "--rst", "a.rst"]).expect("parse");
        assert!(cli.workspace().is_err());
    }

    #[test]
    fn t_cli_004_flags_override_prefs() {
        let cli = Cli::try_parse_from([
            "rst2po",
            "intro",
            "--merged-dir",
            "done",
            "--footnote-rubric",
            "Notes",
        ])
        .expect("parse");
        let mut prefs = AppPrefs::default();
        cli.apply_to(&mut prefs);
        assert_eq!(prefs.merged_dir, "done");
        assert_eq!(prefs.footnote_rubric, "Notes");
    }
}
