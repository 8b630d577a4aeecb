use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use holefit::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "holefit")]
#[command(about = "Transform figure poses and check edge lengths against a problem")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write the figure's rest pose as a solution
    Init {
        #[arg(long)]
        problem: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Apply transforms and write the resulting solution plus a provenance sidecar
    Apply {
        #[arg(long)]
        problem: PathBuf,
        /// Starting solution (rest pose if omitted)
        #[arg(long)]
        solution: Option<PathBuf>,
        /// Transform in text form, e.g. translate=3,4 rotate=0,0,90 flip=1,0,x
        /// reflect=2,0,1 round|floor|ceil snap=2 init; repeatable, applied in order
        #[arg(long = "op")]
        ops: Vec<Transform>,
        /// JSON array of transforms, applied after --op
        #[arg(long)]
        script: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Classify every edge; fails when any edge is out of tolerance
    Check {
        #[arg(long)]
        problem: PathBuf,
        #[arg(long)]
        solution: PathBuf,
    },
    /// Draw the problem (and optionally a solution) as SVG
    Render {
        #[arg(long)]
        problem: PathBuf,
        #[arg(long)]
        solution: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print size and extent of one or more problems
    Summary {
        #[arg(required = true)]
        problems: Vec<PathBuf>,
    },
    /// List solution vertices sitting exactly on hole points
    Hints {
        #[arg(long)]
        problem: PathBuf,
        #[arg(long)]
        solution: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Init { problem, out } => init(&problem, out.as_deref()),
        Action::Apply {
            problem,
            solution,
            ops,
            script,
            out,
        } => apply(&problem, solution.as_deref(), ops, script.as_deref(), &out).map(|_| ()),
        Action::Check { problem, solution } => check(&problem, &solution),
        Action::Render {
            problem,
            solution,
            out,
        } => render(&problem, solution.as_deref(), &out),
        Action::Summary { problems } => {
            for line in summary(&problems)? {
                println!("{line}");
            }
            Ok(())
        }
        Action::Hints { problem, solution } => {
            println!("{}", hints(&problem, &solution)?);
            Ok(())
        }
    }
}

fn load_problem(path: &Path) -> Result<Problem> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Problem::from_json(&text).with_context(|| format!("parsing problem {}", path.display()))
}

fn load_solution(problem: &Problem, path: &Path) -> Result<Solution> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Solution::from_json_for(problem, &text)
        .with_context(|| format!("parsing solution {}", path.display()))
}

fn write_output(out: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(out, contents).with_context(|| format!("writing {}", out.display()))
}

fn init(problem: &Path, out: Option<&Path>) -> Result<()> {
    tracing::info!(problem = %problem.display(), "init");
    let p = load_problem(problem)?;
    let json = Solution::new(init_pose(&p.figure))?.to_json()?;
    match out {
        Some(out) => write_output(out, &json),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn apply(
    problem: &Path,
    solution: Option<&Path>,
    mut ops: Vec<Transform>,
    script: Option<&Path>,
    out: &Path,
) -> Result<Solution> {
    let p = load_problem(problem)?;
    if let Some(script) = script {
        let text =
            fs::read_to_string(script).with_context(|| format!("reading {}", script.display()))?;
        let more: Vec<Transform> = serde_json::from_str(&text)
            .with_context(|| format!("parsing transform script {}", script.display()))?;
        ops.extend(more);
    }
    if ops.is_empty() {
        bail!("no transforms given (use --op or --script)");
    }
    let start = match solution {
        Some(path) => load_solution(&p, path)?,
        None => Solution::new(init_pose(&p.figure))?,
    };
    let names: Vec<String> = ops.iter().map(Transform::to_string).collect();
    tracing::info!(problem = %problem.display(), ops = ?names, "apply");

    let result = apply_all(&p, &start, &ops)?;
    let report = classify_edges(&p, &result.vertices)?;
    tracing::info!(
        valid = report.valid.len(),
        invalid = report.invalid.len(),
        max_stretch_ppm = report.max_stretch_ppm(),
        "edges"
    );

    write_output(out, &result.to_json()?)?;
    let payload = provenance::Payload::new(
        serde_json::json!({
            "problem": problem.to_string_lossy(),
            "solution": solution.map(|s| s.to_string_lossy().into_owned()),
            "epsilon": p.epsilon,
        }),
        names,
    );
    if let Err(e) = provenance::write_sidecar(out, &payload) {
        // no artifact without provenance
        let _ = fs::remove_file(out);
        return Err(e);
    }
    Ok(result)
}

#[derive(Serialize)]
struct CheckReport<'a> {
    valid: &'a [Edge],
    invalid: &'a [Edge],
    max_stretch_ppm: f64,
}

fn check(problem: &Path, solution: &Path) -> Result<()> {
    let p = load_problem(problem)?;
    let s = load_solution(&p, solution)?;
    let report = classify_edges(&p, &s.vertices)?;
    let out = CheckReport {
        valid: &report.valid,
        invalid: &report.invalid,
        max_stretch_ppm: report.max_stretch_ppm(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    for c in report.checks.iter().filter(|c| !c.valid) {
        tracing::warn!(
            edge = %c.edge,
            stretch_ppm = c.stretch_ppm,
            epsilon = p.epsilon,
            "edge out of tolerance"
        );
    }
    if !report.is_all_valid() {
        bail!("{} of {} edges out of tolerance", report.invalid.len(), p.figure.edges.len());
    }
    Ok(())
}

fn render(problem: &Path, solution: Option<&Path>, out: &Path) -> Result<()> {
    tracing::info!(problem = %problem.display(), out = %out.display(), "render");
    let p = load_problem(problem)?;
    let s = solution.map(|path| load_solution(&p, path)).transpose()?;
    let scene = Scene::build(&p, s.as_ref())?;
    write_output(out, &scene.to_svg())
}

#[derive(Serialize)]
struct SummaryRow {
    problem: String,
    #[serde(flatten)]
    summary: ProblemSummary,
}

/// One JSON line per problem.
fn summary(problems: &[PathBuf]) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(problems.len());
    for path in problems {
        let p = load_problem(path)?;
        let row = SummaryRow {
            problem: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            summary: ProblemSummary::of(&p),
        };
        lines.push(serde_json::to_string(&row)?);
    }
    Ok(lines)
}

/// `[[vertex, [x, y]], ...]` for vertices sitting on hole points.
fn hints(problem: &Path, solution: &Path) -> Result<String> {
    let p = load_problem(problem)?;
    let s = load_solution(&p, solution)?;
    let hits: Vec<(usize, [f64; 2])> = find_coincident_vertices(&s.vertices, &p.hole)
        .into_iter()
        .map(|(i, pt)| (i, [pt.x, pt.y]))
        .collect();
    tracing::info!(count = hits.len(), "hints");
    Ok(serde_json::to_string(&hits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PROBLEM: &str = r#"{
        "hole": [[0,0],[10,0],[10,10],[0,10]],
        "figure": {"vertices": [[1,1],[4,1],[1,5]], "edges": [[0,1],[1,2],[2,0]]},
        "epsilon": 0
    }"#;

    #[test]
    fn apply_writes_solution_and_sidecar() {
        let dir = tempdir().unwrap();
        let problem = dir.path().join("p.json");
        fs::write(&problem, PROBLEM).unwrap();
        let out = dir.path().join("out").join("s.json");
        let ops = vec!["translate=2,3".parse().unwrap(), "flip=2,0,x".parse().unwrap()];
        let result = apply(&problem, None, ops, None, &out).unwrap();
        // vertex 2 at (3, 8) flipped across y = 4
        assert_eq!(result.vertices[2], holefit::Point::new(3.0, 0.0));
        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, r#"{"vertices":[[3,4],[6,4],[3,0]]}"#);
        assert!(dir.path().join("out").join("s.provenance.json").exists());
    }

    #[test]
    fn apply_reads_script_and_existing_solution() {
        let dir = tempdir().unwrap();
        let problem = dir.path().join("p.json");
        fs::write(&problem, PROBLEM).unwrap();
        let start = dir.path().join("start.json");
        fs::write(&start, r#"{"vertices": [[1.4,1.6],[4,1],[1,5]]}"#).unwrap();
        let script = dir.path().join("ops.json");
        fs::write(&script, r#"[{"op": "quantize", "mode": "round"}]"#).unwrap();
        let out = dir.path().join("s.json");
        let result = apply(&problem, Some(&start), Vec::new(), Some(&script), &out).unwrap();
        assert_eq!(result.vertices[0], holefit::Point::new(1.0, 2.0));
    }

    #[test]
    fn apply_without_ops_fails() {
        let dir = tempdir().unwrap();
        let problem = dir.path().join("p.json");
        fs::write(&problem, PROBLEM).unwrap();
        let out = dir.path().join("s.json");
        assert!(apply(&problem, None, Vec::new(), None, &out).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn check_fails_on_stretched_edge() {
        let dir = tempdir().unwrap();
        let problem = dir.path().join("p.json");
        fs::write(&problem, PROBLEM).unwrap();
        let good = dir.path().join("good.json");
        fs::write(&good, r#"{"vertices": [[2,2],[5,2],[2,6]]}"#).unwrap();
        assert!(check(&problem, &good).is_ok());
        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"vertices": [[1,1],[5,1],[1,5]]}"#).unwrap();
        assert!(check(&problem, &bad).is_err());
    }

    #[test]
    fn apply_removes_output_when_sidecar_fails() {
        let dir = tempdir().unwrap();
        let problem = dir.path().join("p.json");
        fs::write(&problem, PROBLEM).unwrap();
        let out = dir.path().join("s.json");
        // a directory where the sidecar file should go makes its write fail
        fs::create_dir(dir.path().join("s.provenance.json")).unwrap();
        let ops = vec!["translate=1,1".parse().unwrap()];
        assert!(apply(&problem, None, ops, None, &out).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn apply_rejects_overflowing_transform() {
        let dir = tempdir().unwrap();
        let problem = dir.path().join("p.json");
        fs::write(&problem, PROBLEM).unwrap();
        let out = dir.path().join("s.json");
        let ops = vec![Transform::Translate { dx: 1.7e308, dy: 0.0 }; 2];
        assert!(apply(&problem, None, ops, None, &out).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn summary_prints_one_row_per_problem() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("001.json");
        let b = dir.path().join("002.json");
        fs::write(&a, PROBLEM).unwrap();
        fs::write(&b, PROBLEM).unwrap();
        let lines = summary(&[a, b]).unwrap();
        assert_eq!(lines.len(), 2);
        let row: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(row["problem"], "001");
        assert_eq!(row["hole_points"], 4);
        assert_eq!(row["figure_vertices"], 3);
        assert_eq!(row["figure_edges"], 3);
        assert_eq!(row["epsilon"], 0);
        assert_eq!(row["hole_min"], serde_json::json!([0.0, 0.0]));
        assert_eq!(row["hole_max"], serde_json::json!([10.0, 10.0]));
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["problem"], "002");
    }

    #[test]
    fn summary_fails_on_missing_file() {
        let dir = tempdir().unwrap();
        assert!(summary(&[dir.path().join("nope.json")]).is_err());
    }

    #[test]
    fn hints_lists_vertices_on_hole_points() {
        let dir = tempdir().unwrap();
        let problem = dir.path().join("p.json");
        fs::write(&problem, PROBLEM).unwrap();
        let solution = dir.path().join("s.json");
        fs::write(&solution, r#"{"vertices": [[10,10],[4,1],[0,0]]}"#).unwrap();
        assert_eq!(hints(&problem, &solution).unwrap(), "[[0,[10.0,10.0]],[2,[0.0,0.0]]]");
        let none = dir.path().join("none.json");
        fs::write(&none, r#"{"vertices": [[1,1],[4,1],[1,5]]}"#).unwrap();
        assert_eq!(hints(&problem, &none).unwrap(), "[]");
    }

    #[test]
    fn render_writes_svg() {
        let dir = tempdir().unwrap();
        let problem = dir.path().join("p.json");
        fs::write(&problem, PROBLEM).unwrap();
        let out = dir.path().join("view.svg");
        render(&problem, None, &out).unwrap();
        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.contains(r#"id="hole""#));
    }

    #[test]
    fn cli_parses_ops() {
        let cmd = Cmd::try_parse_from([
            "holefit", "apply", "--problem", "p.json", "--op", "translate=1,2", "--op", "round",
            "--out", "s.json",
        ])
        .unwrap();
        match cmd.action {
            Action::Apply { ops, .. } => assert_eq!(ops.len(), 2),
            _ => panic!("expected apply"),
        }
        assert!(Cmd::try_parse_from([
            "holefit", "apply", "--problem", "p.json", "--op", "spin=1", "--out", "s.json",
        ])
        .is_err());
    }
}
