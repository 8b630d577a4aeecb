//! Walk a small triangle through a few transforms and print the edge report.
//!
//! Usage:
//!   cargo run -p holefit --example fit_demo

use holefit::prelude::*;

const PROBLEM: &str = r#"{
    "hole": [[0,0],[20,0],[20,20],[0,20]],
    "figure": {"vertices": [[2,2],[8,2],[2,10]], "edges": [[0,1],[1,2],[2,0]]},
    "epsilon": 20000
}"#;

fn main() -> Result<()> {
    let problem = Problem::from_json(PROBLEM)?;
    let start = Solution::new(init_pose(&problem.figure))?;
    let ops: Vec<Transform> = ["translate=3,3", "rotate=5,5,17", "round", "snap=1.5"]
        .iter()
        .map(|s| s.parse())
        .collect::<Result<_>>()?;
    let mut cur = start;
    for op in &ops {
        cur = apply_all(&problem, &cur, std::slice::from_ref(op))?;
        let report = classify_edges(&problem, &cur.vertices)?;
        let name = op.to_string();
        println!(
            "{name:<16} valid={} invalid={} max_stretch={:.0}ppm",
            report.valid.len(),
            report.invalid.len(),
            report.max_stretch_ppm()
        );
    }
    println!("{}", cur.to_json()?);
    Ok(())
}
