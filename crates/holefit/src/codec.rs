//! JSON wire shapes. Points travel as `[x, y]` arrays.

use serde::{ser, Deserialize, Serialize, Serializer};

use crate::error::{EngineError, Result};
use crate::model::{check_finite, Bonus, Edge, Figure, Problem, Solution};
use crate::Point;

type WirePoint = [f64; 2];

#[derive(Deserialize)]
pub(crate) struct ProblemWire {
    hole: Vec<WirePoint>,
    figure: FigureWire,
    epsilon: i64,
    #[serde(default)]
    bonuses: Vec<BonusWire>,
}

#[derive(Deserialize)]
struct FigureWire {
    vertices: Vec<WirePoint>,
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct BonusWire {
    bonus: String,
    problem: u32,
    position: WirePoint,
}

#[derive(Deserialize)]
pub(crate) struct SolutionWire {
    pub vertices: Vec<WirePoint>,
}

impl ProblemWire {
    pub(crate) fn into_problem(self) -> Result<Problem> {
        let epsilon = u64::try_from(self.epsilon)
            .map_err(|_| EngineError::malformed(format!("epsilon {} < 0", self.epsilon)))?;
        let figure = Figure::new(points_from_wire(self.figure.vertices), self.figure.edges)?;
        let bonuses: Vec<Bonus> = self
            .bonuses
            .into_iter()
            .map(|b| Bonus {
                kind: b.bonus,
                problem: b.problem,
                position: Point::new(b.position[0], b.position[1]),
            })
            .collect();
        let positions: Vec<Point> = bonuses.iter().map(|b| b.position).collect();
        check_finite("bonuses.position", &positions)?;
        let mut problem = Problem::new(points_from_wire(self.hole), figure, epsilon)?;
        problem.bonuses = bonuses;
        Ok(problem)
    }
}

pub(crate) fn points_from_wire(points: Vec<WirePoint>) -> Vec<Point> {
    points.into_iter().map(|[x, y]| Point::new(x, y)).collect()
}

/// Coordinate that serializes as an integer when it holds one exactly.
/// Non-finite values are a serializer error (JSON has no spelling for them).
struct Coord(f64);

// 2^53: beyond this not every integer is representable as f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let v = self.0;
        if !v.is_finite() {
            return Err(ser::Error::custom(format!("non-finite coordinate {v}")));
        }
        if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT {
            s.serialize_i64(v as i64)
        } else {
            s.serialize_f64(v)
        }
    }
}

#[derive(Serialize)]
pub(crate) struct SolutionOut {
    vertices: Vec<[Coord; 2]>,
}

impl From<&Solution> for SolutionOut {
    fn from(s: &Solution) -> Self {
        Self {
            vertices: s.vertices.iter().map(|p| [Coord(p.x), Coord(p.y)]).collect(),
        }
    }
}
